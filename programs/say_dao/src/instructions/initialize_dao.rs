use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};
use crate::constants::*;
use crate::states::*;
use crate::events::*;

#[derive(Accounts)]
pub struct InitializeDao<'info> {
    // Step 1: Create DAO PDA
    #[account(
        init,
        payer = authority,
        space = Dao::LEN,
        seeds = [DAO_SEED],
        bump
    )]
    pub dao: Account<'info, Dao>,

    // Step 2: Create SayToken mint PDA, minted by the DAO
    #[account(
        init,
        payer = authority,
        seeds = [MINT_SEED],
        bump,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = dao
    )]
    pub mint: Account<'info, Mint>,

    // Step 3: Authority pays for account creation and becomes the inviter
    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_dao(ctx: Context<InitializeDao>) -> Result<()> {
    // Step 1: Fill in the DAO root
    let dao = &mut ctx.accounts.dao;
    dao.authority = ctx.accounts.authority.key();
    dao.mint = ctx.accounts.mint.key();
    dao.member_count = 0;
    dao.poll_count = 0;
    dao.meeting_count = 0;
    dao.bump = ctx.bumps.dao;
    dao.mint_bump = ctx.bumps.mint;

    // Step 2: Emit initialization event
    let clock = Clock::get()?;
    emit!(DaoInitialized {
        dao: dao.key(),
        authority: dao.authority,
        mint: dao.mint,
        timestamp: clock.unix_timestamp,
    });

    msg!("SayDAO initialized, mint: {}", dao.mint);

    Ok(())
}

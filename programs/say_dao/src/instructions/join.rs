use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
#[instruction(id: u16)]
pub struct Join<'info> {
    // Step 1: The DAO authority co-signs, which is the invitation
    #[account(
        mut,
        seeds = [DAO_SEED],
        bump = dao.bump,
        has_one = authority @ SayDaoError::InvalidInvite,
        has_one = mint
    )]
    pub dao: Account<'info, Dao>,

    // Step 2: Claim the identifier; fails if it is taken
    #[account(
        init,
        payer = wallet,
        space = Member::LEN,
        seeds = [MEMBER_SEED, id.to_le_bytes().as_ref()],
        bump
    )]
    pub member: Account<'info, Member>,

    // Step 3: Index the member by wallet; a wallet joins at most once
    #[account(
        init,
        payer = wallet,
        space = Membership::LEN,
        seeds = [MEMBERSHIP_SEED, wallet.key().as_ref()],
        bump
    )]
    pub membership: Account<'info, Membership>,

    // Step 4: SayToken account of the new member
    #[account(
        mut,
        constraint = token_account.mint == mint.key()
            && token_account.owner == wallet.key() @ SayDaoError::InvalidTokenAccount
    )]
    pub token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    // Step 5: Joining wallet pays for its member account
    #[account(mut)]
    pub wallet: Signer<'info>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn join(ctx: Context<Join>, id: u16) -> Result<()> {
    // Step 1: Identifiers must fit the participant bitmaps
    Member::validate_id(id)?;

    let clock = Clock::get()?;

    // Step 2: Record the member
    let member = &mut ctx.accounts.member;
    member.id = id;
    member.wallet = ctx.accounts.wallet.key();
    member.token_account = ctx.accounts.token_account.key();
    member.joined_at = clock.unix_timestamp;
    member.bump = ctx.bumps.member;

    let membership = &mut ctx.accounts.membership;
    membership.member_id = id;
    membership.token_account = ctx.accounts.token_account.key();
    membership.bump = ctx.bumps.membership;

    // Step 3: Count the member in the eligible-voter set
    let member_count = ctx.accounts.dao.register_member()?;

    // Step 4: Mint the join allocation, signed by the DAO PDA
    let seeds = &[DAO_SEED, &[ctx.accounts.dao.bump]];
    let signer = &[&seeds[..]];

    let cpi_accounts = MintTo {
        mint: ctx.accounts.mint.to_account_info(),
        to: ctx.accounts.token_account.to_account_info(),
        authority: ctx.accounts.dao.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    token::mint_to(
        CpiContext::new_with_signer(cpi_program, cpi_accounts, signer),
        JOIN_ALLOCATION,
    )?;

    emit!(MemberJoined {
        member_id: id,
        wallet: ctx.accounts.wallet.key(),
        allocation: JOIN_ALLOCATION,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Member {} joined: {} ({} members)",
        id,
        ctx.accounts.wallet.key(),
        member_count
    );

    Ok(())
}

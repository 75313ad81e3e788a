use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
pub struct UpdateAuthority<'info> {
    // Step 1: DAO must exist and signer must be current authority
    #[account(
        mut,
        seeds = [DAO_SEED],
        bump = dao.bump,
        has_one = authority @ SayDaoError::Unauthorized
    )]
    pub dao: Account<'info, Dao>,

    // Step 2: Current authority must sign
    pub authority: Signer<'info>,
}

pub fn update_authority(
    ctx: Context<UpdateAuthority>,
    new_authority: Pubkey,
) -> Result<()> {
    let dao = &mut ctx.accounts.dao;

    // Step 1: Swap the inviter; members invited so far keep their seats
    let old_authority = dao.authority;
    dao.authority = new_authority;

    let clock = Clock::get()?;
    emit!(AuthorityUpdated {
        dao: dao.key(),
        old_authority,
        new_authority,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Authority updated: {} -> {}",
        old_authority,
        new_authority
    );

    Ok(())
}

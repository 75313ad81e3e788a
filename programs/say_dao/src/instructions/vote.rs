use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct CastVote<'info> {
    #[account(
        seeds = [DAO_SEED],
        bump = dao.bump,
        has_one = mint
    )]
    pub dao: Account<'info, Dao>,

    #[account(
        mut,
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump = poll.bump
    )]
    pub poll: Account<'info, Poll>,

    // Step 1: Voter's membership record; empty when the voter never joined
    /// CHECK: address is derived from the signer, contents are read by `Membership::resolve`
    #[account(
        seeds = [MEMBERSHIP_SEED, voter.key().as_ref()],
        bump
    )]
    pub membership: UncheckedAccount<'info>,

    // Step 2: Weight comes from the member's registered token account
    pub voter_tokens: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub voter: Signer<'info>,
}

#[allow(unused_variables)]
pub fn vote(ctx: Context<CastVote>, poll_id: u64, choice: u8) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let membership = Membership::resolve(&ctx.accounts.membership, SayDaoError::NotAMember)?;
    require_keys_eq!(
        ctx.accounts.voter_tokens.key(),
        membership.token_account,
        SayDaoError::InvalidTokenAccount
    );
    let voter = membership.member_id;
    let weight = ctx.accounts.voter_tokens.amount;

    ctx.accounts.poll.cast_vote(
        voter,
        choice,
        weight,
        ctx.accounts.mint.supply,
        now,
    )?;

    emit!(VoteCast {
        poll_id: ctx.accounts.poll.id,
        voter,
        choice,
        weight,
        timestamp: now,
    });

    msg!("Member {} voted {} on poll {} with weight {}", voter, choice, ctx.accounts.poll.id, weight);

    Ok(())
}

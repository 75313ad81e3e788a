use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
pub struct CreatePoll<'info> {
    // Step 1: Author's membership record; empty when the author never joined
    /// CHECK: address is derived from the signer, contents are read by `Membership::resolve`
    #[account(
        seeds = [MEMBERSHIP_SEED, author.key().as_ref()],
        bump
    )]
    pub membership: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [DAO_SEED],
        bump = dao.bump
    )]
    pub dao: Account<'info, Dao>,

    // Step 2: Create the poll at the next poll id
    #[account(
        init,
        payer = author,
        space = Poll::LEN,
        seeds = [POLL_SEED, dao.poll_count.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: Account<'info, Poll>,

    #[account(mut)]
    pub author: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates a poll open for `voting_window` seconds from now.
pub fn create_poll(
    ctx: Context<CreatePoll>,
    cid: [u8; 32],
    voting_window: u32,
    options: u8,
) -> Result<()> {
    let clock = Clock::get()?;
    let dao = &mut ctx.accounts.dao;
    let author = Membership::resolve(&ctx.accounts.membership, SayDaoError::NotAMember)?.member_id;

    let id = dao.next_poll_id()?;
    let poll = &mut ctx.accounts.poll;
    poll.open(
        PollParams {
            id,
            cid,
            author,
            options,
            voting_window,
            snapshot: dao.member_count,
            meeting_id: None,
        },
        clock.unix_timestamp,
        ctx.bumps.poll,
    )?;

    emit!(PollCreated {
        poll_id: id,
        author,
        cid,
        options,
        end: poll.end,
        timestamp: clock.unix_timestamp,
    });

    msg!("Poll {} created by member {}, closes at {}", id, author, poll.end);

    Ok(())
}

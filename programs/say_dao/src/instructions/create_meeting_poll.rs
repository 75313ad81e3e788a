use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
pub struct CreateMeetingPoll<'info> {
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

    // Step 2: Poll and meeting are created side by side
    #[account(
        init,
        payer = author,
        space = Poll::LEN,
        seeds = [POLL_SEED, dao.poll_count.to_le_bytes().as_ref()],
        bump
    )]
    pub poll: Account<'info, Poll>,

    #[account(
        init,
        payer = author,
        space = Meeting::LEN,
        seeds = [MEETING_SEED, dao.meeting_count.to_le_bytes().as_ref()],
        bump
    )]
    pub meeting: Account<'info, Meeting>,

    #[account(mut)]
    pub author: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates a yes/no poll about a meeting held between `start` and `end`.
///
/// # Arguments
/// * `cid` - Content identifier of the meeting proposal
/// * `voting_window` - Seconds the poll stays open
/// * `start` / `end` - Meeting time, `start` must lie in the future
/// * `supervisor` - Member id that records attendance after the meeting
pub fn create_meeting_poll(
    ctx: Context<CreateMeetingPoll>,
    cid: [u8; 32],
    voting_window: u32,
    start: i64,
    end: i64,
    supervisor: u16,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let dao = &mut ctx.accounts.dao;
    let author = Membership::resolve(&ctx.accounts.membership, SayDaoError::NotAMember)?.member_id;

    // Step 1: Reserve co-indexed ids
    let poll_id = dao.next_poll_id()?;
    let meeting_id = dao.next_meeting_id()?;

    // Step 2: Set up the meeting; rejects bad windows
    ctx.accounts.meeting.schedule(
        meeting_id,
        poll_id,
        supervisor,
        start,
        end,
        now,
        ctx.bumps.meeting,
    )?;

    // Step 3: Open the poll
    ctx.accounts.poll.open(
        PollParams {
            id: poll_id,
            cid,
            author,
            options: MEETING_POLL_OPTIONS,
            voting_window,
            snapshot: dao.member_count,
            meeting_id: Some(meeting_id),
        },
        now,
        ctx.bumps.poll,
    )?;

    emit!(MeetingPollCreated {
        poll_id,
        meeting_id,
        supervisor,
        start,
        end,
        timestamp: now,
    });

    msg!(
        "Meeting {} (poll {}) scheduled {}..{}, supervisor {}",
        meeting_id,
        poll_id,
        start,
        end,
        supervisor
    );

    Ok(())
}

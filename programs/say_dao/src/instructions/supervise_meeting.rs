use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
#[instruction(meeting_id: u64)]
pub struct SuperviseMeeting<'info> {
    #[account(
        mut,
        seeds = [MEETING_SEED, meeting_id.to_le_bytes().as_ref()],
        bump = meeting.bump
    )]
    pub meeting: Account<'info, Meeting>,

    // The signer's membership record tells which member id it speaks for
    /// CHECK: address is derived from the signer, contents are read by `Membership::resolve`
    #[account(
        seeds = [MEMBERSHIP_SEED, supervisor.key().as_ref()],
        bump
    )]
    pub membership: UncheckedAccount<'info>,

    pub supervisor: Signer<'info>,
}

/// Merges an attendance bitmap into cluster `cluster_index` of the meeting.
#[allow(unused_variables)]
pub fn update_meeting_participants(
    ctx: Context<SuperviseMeeting>,
    meeting_id: u64,
    cluster_index: u16,
    bitmap: u128,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = Membership::resolve(&ctx.accounts.membership, SayDaoError::NotSupervisor)?;
    let meeting = &mut ctx.accounts.meeting;

    let total_participants = meeting.update_participants(
        caller.member_id,
        now,
        cluster_index,
        bitmap,
    )?;

    emit!(ParticipantsUpdated {
        meeting_id: meeting.id,
        cluster_index,
        bitmap,
        total_participants,
        timestamp: now,
    });

    msg!(
        "Meeting {} cluster {} updated, {} participants",
        meeting.id,
        cluster_index,
        total_participants
    );

    Ok(())
}

/// Seals the participant list of a meeting.
#[allow(unused_variables)]
pub fn seal_meeting_participants(ctx: Context<SuperviseMeeting>, meeting_id: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = Membership::resolve(&ctx.accounts.membership, SayDaoError::NotSupervisor)?;
    let meeting = &mut ctx.accounts.meeting;

    let completed = meeting.seal(caller.member_id, now)?;

    emit!(ParticipantsSealed {
        meeting_id: meeting.id,
        total_participants: meeting.total_participants,
        timestamp: now,
    });

    // Nobody attended, so there is no distribution call to report completion
    if completed {
        emit!(DistributionCompleted {
            meeting_id: meeting.id,
            processed: meeting.processed,
            timestamp: now,
        });
    }

    msg!(
        "Meeting {} sealed with {} participants",
        meeting.id,
        meeting.total_participants
    );

    Ok(())
}

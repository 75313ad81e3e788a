use anchor_lang::prelude::*;
use crate::constants::*;
use crate::states::*;

#[derive(Accounts)]
#[instruction(poll_id: u64)]
pub struct ViewPoll<'info> {
    #[account(
        seeds = [POLL_SEED, poll_id.to_le_bytes().as_ref()],
        bump = poll.bump
    )]
    pub poll: Account<'info, Poll>,
}

#[derive(Accounts)]
#[instruction(meeting_id: u64)]
pub struct ViewMeeting<'info> {
    #[account(
        seeds = [MEETING_SEED, meeting_id.to_le_bytes().as_ref()],
        bump = meeting.bump
    )]
    pub meeting: Account<'info, Meeting>,
}

/// Weighted tally per option
#[allow(unused_variables)]
pub fn get_votes(ctx: Context<ViewPoll>, poll_id: u64) -> Result<Vec<u64>> {
    Ok(ctx.accounts.poll.votes.clone())
}

#[allow(unused_variables)]
pub fn get_remaining_distribution_clusters(
    ctx: Context<ViewMeeting>,
    meeting_id: u64,
) -> Result<u32> {
    Ok(ctx.accounts.meeting.remaining_distribution_clusters())
}

/// Bits of the cluster under the cursor that are still to be distributed
#[allow(unused_variables)]
pub fn get_next_distribution_bitmap(ctx: Context<ViewMeeting>, meeting_id: u64) -> Result<u128> {
    Ok(ctx.accounts.meeting.next_distribution_bitmap())
}

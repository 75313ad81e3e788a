// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod states;

pub use instructions::*;

pub use errors::SayDaoError;

declare_id!("8ZkS5ayDAoMtgPo11sDstr1butE9vQxWcTtR7fYbNhJp");

#[program]
pub mod say_dao {
    use super::*;

    pub fn initialize_dao(ctx: Context<InitializeDao>) -> Result<()> {
        instructions::initialize_dao::initialize_dao(ctx)
    }

    pub fn join(ctx: Context<Join>, id: u16) -> Result<()> {
        instructions::join::join(ctx, id)
    }

    pub fn update_authority(ctx: Context<UpdateAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::update_authority::update_authority(ctx, new_authority)
    }

    pub fn create_poll(
        ctx: Context<CreatePoll>,
        cid: [u8; 32],
        voting_window: u32,
        options: u8,
    ) -> Result<()> {
        instructions::create_poll::create_poll(ctx, cid, voting_window, options)
    }

    pub fn create_meeting_poll(
        ctx: Context<CreateMeetingPoll>,
        cid: [u8; 32],
        voting_window: u32,
        start: i64,
        end: i64,
        supervisor: u16,
    ) -> Result<()> {
        instructions::create_meeting_poll::create_meeting_poll(
            ctx,
            cid,
            voting_window,
            start,
            end,
            supervisor,
        )
    }

    pub fn vote(ctx: Context<CastVote>, poll_id: u64, choice: u8) -> Result<()> {
        instructions::vote::vote(ctx, poll_id, choice)
    }

    pub fn update_meeting_participants(
        ctx: Context<SuperviseMeeting>,
        meeting_id: u64,
        cluster_index: u16,
        bitmap: u128,
    ) -> Result<()> {
        instructions::supervise_meeting::update_meeting_participants(
            ctx,
            meeting_id,
            cluster_index,
            bitmap,
        )
    }

    pub fn seal_meeting_participants(ctx: Context<SuperviseMeeting>, meeting_id: u64) -> Result<()> {
        instructions::supervise_meeting::seal_meeting_participants(ctx, meeting_id)
    }

    pub fn distribute_meeting_tokens<'info>(
        ctx: Context<'_, '_, 'info, 'info, DistributeMeetingTokens<'info>>,
        meeting_id: u64,
        batch_size: u32,
    ) -> Result<()> {
        instructions::distribute_meeting_tokens::distribute_meeting_tokens(
            ctx, meeting_id, batch_size,
        )
    }

    pub fn get_votes(ctx: Context<ViewPoll>, poll_id: u64) -> Result<Vec<u64>> {
        instructions::views::get_votes(ctx, poll_id)
    }

    pub fn get_remaining_distribution_clusters(
        ctx: Context<ViewMeeting>,
        meeting_id: u64,
    ) -> Result<u32> {
        instructions::views::get_remaining_distribution_clusters(ctx, meeting_id)
    }

    pub fn get_next_distribution_bitmap(
        ctx: Context<ViewMeeting>,
        meeting_id: u64,
    ) -> Result<u128> {
        instructions::views::get_next_distribution_bitmap(ctx, meeting_id)
    }
}

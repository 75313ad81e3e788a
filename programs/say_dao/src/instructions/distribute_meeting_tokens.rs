use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, MintTo, Token};
use crate::constants::*;
use crate::states::*;
use crate::events::*;
use crate::errors::*;

#[derive(Accounts)]
#[instruction(meeting_id: u64)]
pub struct DistributeMeetingTokens<'info> {
    // Step 1: DAO signs the mint CPI
    #[account(
        seeds = [DAO_SEED],
        bump = dao.bump,
        has_one = mint
    )]
    pub dao: Account<'info, Dao>,

    // Step 2: Meeting holds the sealed list and the cursor
    #[account(
        mut,
        seeds = [MEETING_SEED, meeting_id.to_le_bytes().as_ref()],
        bump = meeting.bump
    )]
    pub meeting: Account<'info, Meeting>,

    #[account(mut)]
    pub mint: Account<'info, Mint>,

    // Step 3: Only the supervisor drives distribution
    /// CHECK: address is derived from the signer, contents are read by `Membership::resolve`
    #[account(
        seeds = [MEMBERSHIP_SEED, supervisor.key().as_ref()],
        bump
    )]
    pub membership: UncheckedAccount<'info>,

    pub supervisor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Credits the next batch of meeting participants.
///
/// `remaining_accounts` carries one `[member, token account]` pair per
/// participant in the batch, in ascending id order. Clients compute the batch
/// off-chain from the meeting's participants and cursor.
///
/// # Arguments
/// * `meeting_id` - Meeting to distribute for (used for account derivation)
/// * `batch_size` - Number of identifier positions to scan
#[allow(unused_variables)]
pub fn distribute_meeting_tokens<'info>(
    ctx: Context<'_, '_, 'info, 'info, DistributeMeetingTokens<'info>>,
    meeting_id: u64,
    batch_size: u32,
) -> Result<()> {
    // Step 1: Advance the cursor; fails unless sealed and called by the supervisor
    let caller = Membership::resolve(&ctx.accounts.membership, SayDaoError::NotSupervisor)?;
    let recipients = ctx.accounts.meeting.distribute(caller.member_id, batch_size)?;

    // Step 2: Every recipient needs its account pair
    require!(
        ctx.remaining_accounts.len() == recipients.len() * 2,
        SayDaoError::RecipientMismatch
    );

    // Step 3: Prepare PDA signer seeds
    let seeds = &[DAO_SEED, &[ctx.accounts.dao.bump]];
    let signer = &[&seeds[..]];

    let mut credited: u32 = 0;
    for (id, pair) in recipients.iter().zip(ctx.remaining_accounts.chunks(2)) {
        let (member_info, token_info) = (&pair[0], &pair[1]);

        // Step 4: Identifiers that never joined have no member account
        if member_info.data_is_empty() {
            let (expected, _) = Member::address(*id);
            require_keys_eq!(member_info.key(), expected, SayDaoError::RecipientMismatch);
            msg!("Participant {} is not a member, skipping", id);
            continue;
        }

        // Step 5: Resolve the member's registered token account
        let member: Account<Member> = Account::try_from(member_info)?;
        require!(member.id == *id, SayDaoError::RecipientMismatch);
        require_keys_eq!(
            token_info.key(),
            member.token_account,
            SayDaoError::RecipientMismatch
        );

        // Step 6: Mint the reward
        let cpi_accounts = MintTo {
            mint: ctx.accounts.mint.to_account_info(),
            to: token_info.clone(),
            authority: ctx.accounts.dao.to_account_info(),
        };
        let cpi_program = ctx.accounts.token_program.to_account_info();
        token::mint_to(
            CpiContext::new_with_signer(cpi_program, cpi_accounts, signer),
            MEETING_REWARD,
        )?;
        credited += 1;
    }

    let now = Clock::get()?.unix_timestamp;
    let meeting = &ctx.accounts.meeting;
    let remaining_clusters = meeting.remaining_distribution_clusters();

    emit!(MeetingTokensDistributed {
        meeting_id: meeting.id,
        recipients: recipients.clone(),
        amount_each: MEETING_REWARD,
        remaining_clusters,
        timestamp: now,
    });

    if !recipients.is_empty() && meeting.is_fully_distributed() {
        emit!(DistributionCompleted {
            meeting_id: meeting.id,
            processed: meeting.processed,
            timestamp: now,
        });
    }

    msg!(
        "Meeting {}: credited {} of {} participants, {} clusters left",
        meeting.id,
        credited,
        recipients.len(),
        remaining_clusters
    );

    Ok(())
}

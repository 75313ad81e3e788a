use anchor_lang::prelude::*;

/// Event emitted when the DAO and its token mint are created
#[event]
pub struct DaoInitialized {
    pub dao: Pubkey,
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub timestamp: i64,
}

/// Event emitted when an invited wallet joins
#[event]
pub struct MemberJoined {
    pub member_id: u16,
    pub wallet: Pubkey,
    pub allocation: u64,
    pub timestamp: i64,
}

/// Event emitted when the inviting authority changes
#[event]
pub struct AuthorityUpdated {
    pub dao: Pubkey,
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct PollCreated {
    pub poll_id: u64,
    pub author: u16,
    pub cid: [u8; 32],
    pub options: u8,
    pub end: i64,
    pub timestamp: i64,
}

#[event]
pub struct MeetingPollCreated {
    pub poll_id: u64,
    pub meeting_id: u64,
    pub supervisor: u16,
    pub start: i64,
    pub end: i64,
    pub timestamp: i64,
}

#[event]
pub struct VoteCast {
    pub poll_id: u64,
    pub voter: u16,
    pub choice: u8,
    pub weight: u64,
    pub timestamp: i64,
}

/// Event emitted after the supervisor merges a cluster bitmap
#[event]
pub struct ParticipantsUpdated {
    pub meeting_id: u64,
    pub cluster_index: u16,
    pub bitmap: u128,
    pub total_participants: u32,
    pub timestamp: i64,
}

#[event]
pub struct ParticipantsSealed {
    pub meeting_id: u64,
    pub total_participants: u32,
    pub timestamp: i64,
}

/// Event emitted for every distribution batch
#[event]
pub struct MeetingTokensDistributed {
    pub meeting_id: u64,
    pub recipients: Vec<u16>,
    pub amount_each: u64,
    pub remaining_clusters: u32,
    pub timestamp: i64,
}

#[event]
pub struct DistributionCompleted {
    pub meeting_id: u64,
    /// Participants the cursor moved past, including skipped non-members
    pub processed: u32,
    pub timestamp: i64,
}

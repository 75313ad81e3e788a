/// Program constants for SayDAO

/// PDA seed for the DAO root account
pub const DAO_SEED: &[u8] = b"dao";

/// PDA seed for the SayToken mint
pub const MINT_SEED: &[u8] = b"say_token";

/// PDA seed for member accounts, followed by the little-endian member id
pub const MEMBER_SEED: &[u8] = b"member";

/// PDA seed for the wallet -> member record, followed by the wallet key
pub const MEMBERSHIP_SEED: &[u8] = b"membership";

/// PDA seed for poll accounts, followed by the little-endian poll id
pub const POLL_SEED: &[u8] = b"poll";

/// PDA seed for meeting accounts, followed by the little-endian meeting id
pub const MEETING_SEED: &[u8] = b"meeting";

/// Number of identifiers covered by one participant cluster
pub const CLUSTER_WIDTH: u32 = u128::BITS;

/// Maximum number of clusters stored in a participant set
pub const MAX_PARTICIPANT_CLUSTERS: usize = 64;

/// Cluster indices stay below this bound, so a set never outgrows its account
pub const MAX_CLUSTER_INDEX: u32 = MAX_PARTICIPANT_CLUSTERS as u32;

/// Member identifiers are assigned below this bound (8192)
pub const MAX_MEMBER_ID: u32 = MAX_CLUSTER_INDEX * CLUSTER_WIDTH;

/// Maximum number of options a poll can offer
pub const MAX_POLL_OPTIONS: usize = 8;

/// Meeting polls are yes/no
pub const MEETING_POLL_OPTIONS: u8 = 2;

/// SayToken decimals
pub const TOKEN_DECIMALS: u8 = 9;

/// Tokens minted to a new member on join (100 SAY)
pub const JOIN_ALLOCATION: u64 = 100 * 10u64.pow(TOKEN_DECIMALS as u32);

/// Tokens minted to every meeting participant (10 SAY)
pub const MEETING_REWARD: u64 = 10 * 10u64.pow(TOKEN_DECIMALS as u32);

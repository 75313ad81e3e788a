use anchor_lang::prelude::*;

#[error_code]
pub enum SayDaoError {
    #[msg("Caller is not a registered member")]
    NotAMember,

    #[msg("Caller is not the meeting supervisor")]
    NotSupervisor,

    #[msg("Invalid time window")]
    InvalidWindow,

    #[msg("Member has already voted on this poll")]
    AlreadyVoted,

    #[msg("Voting is closed for this poll")]
    VotingClosed,

    #[msg("The meeting has not ended yet (updates and sealing wait for the end)")]
    TooEarly,

    #[msg("Meeting participants are already sealed")]
    AlreadySealed,

    #[msg("Meeting participants are not sealed yet")]
    NotSealed,

    #[msg("Join is not co-signed by the DAO authority")]
    InvalidInvite,

    #[msg("Unauthorized - signer is not the authority")]
    Unauthorized,

    #[msg("Number of poll options out of range")]
    InvalidOptions,

    #[msg("Vote choice is not an option of this poll")]
    InvalidOption,

    #[msg("Cluster index out of range")]
    InvalidCluster,

    #[msg("Member identifier out of range")]
    InvalidMemberId,

    #[msg("Batch size must be greater than 0")]
    InvalidBatchSize,

    #[msg("Token account is not a SayToken account owned by the member")]
    InvalidTokenAccount,

    #[msg("Recipient accounts do not match the distribution batch")]
    RecipientMismatch,

    #[msg("Arithmetic overflow occurred")]
    ArithmeticOverflow,
}

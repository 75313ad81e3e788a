use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::*;
use crate::states::ParticipantSet;

/// A poll weighted by SayToken balance, stored at ["poll", id]
#[account]
#[derive(InitSpace)]
pub struct Poll {
    pub id: u64,                    // 8 bytes

    /// Content identifier of the proposal text
    pub cid: [u8; 32],              // 32 bytes

    /// Member id of the author
    pub author: u16,                // 2 bytes

    pub options: u8,                // 1 byte

    pub created_at: i64,            // 8 bytes

    /// Voting closes at this timestamp (exclusive)
    pub end: i64,                   // 8 bytes

    /// Number of members that voted
    pub voters: u32,                // 4 bytes

    /// Token supply observed at the latest vote
    pub supply: u64,                // 8 bytes

    /// Size of the eligible-voter set when the poll was created
    pub snapshot: u32,              // 4 bytes

    /// Set for meeting polls
    pub meeting_id: Option<u64>,    // 1 + 8 bytes

    /// Weighted tally per option
    #[max_len(MAX_POLL_OPTIONS)]
    pub votes: Vec<u64>,            // 4 + (8 * MAX_POLL_OPTIONS) bytes

    /// Members that already voted
    pub ballots: ParticipantSet,

    pub bump: u8,                   // 1 byte
}

/// Parameters of a new poll
pub struct PollParams {
    pub id: u64,
    pub cid: [u8; 32],
    pub author: u16,
    pub options: u8,
    pub voting_window: u32,
    pub snapshot: u32,
    pub meeting_id: Option<u64>,
}

impl Poll {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    /// Initialize a freshly created poll account
    pub fn open(&mut self, params: PollParams, now: i64, bump: u8) -> Result<()> {
        require!(
            params.options >= 2 && params.options as usize <= MAX_POLL_OPTIONS,
            SayDaoError::InvalidOptions
        );
        require!(params.voting_window > 0, SayDaoError::InvalidWindow);

        self.id = params.id;
        self.cid = params.cid;
        self.author = params.author;
        self.options = params.options;
        self.created_at = now;
        self.end = now
            .checked_add(params.voting_window as i64)
            .ok_or(SayDaoError::ArithmeticOverflow)?;
        self.voters = 0;
        self.supply = 0;
        self.snapshot = params.snapshot;
        self.meeting_id = params.meeting_id;
        self.votes = vec![0; params.options as usize];
        self.ballots = ParticipantSet::default();
        self.bump = bump;
        Ok(())
    }

    pub fn is_open(&self, now: i64) -> bool {
        now >= self.created_at && now < self.end
    }

    /// Record one member's ballot with the given weight
    pub fn cast_vote(
        &mut self,
        voter: u16,
        choice: u8,
        weight: u64,
        supply: u64,
        now: i64,
    ) -> Result<()> {
        require!(self.is_open(now), SayDaoError::VotingClosed);
        require!(choice < self.options, SayDaoError::InvalidOption);
        require!(!self.ballots.contains(voter), SayDaoError::AlreadyVoted);

        let tally = self.votes[choice as usize]
            .checked_add(weight)
            .ok_or(SayDaoError::ArithmeticOverflow)?;
        let voters = self
            .voters
            .checked_add(1)
            .ok_or(SayDaoError::ArithmeticOverflow)?;

        self.ballots.insert(voter)?;
        self.votes[choice as usize] = tally;
        self.voters = voters;
        self.supply = supply;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::Member;

    const NOW: i64 = 1_700_000_000;
    const CID: [u8; 32] = [7; 32];

    fn empty() -> Poll {
        Poll {
            id: 0,
            cid: [0; 32],
            author: 0,
            options: 0,
            created_at: 0,
            end: 0,
            voters: 0,
            supply: 0,
            snapshot: 0,
            meeting_id: None,
            votes: Vec::new(),
            ballots: ParticipantSet::default(),
            bump: 0,
        }
    }

    fn params(options: u8, voting_window: u32) -> PollParams {
        PollParams {
            id: 0,
            cid: CID,
            author: 1,
            options,
            voting_window,
            snapshot: 3,
            meeting_id: None,
        }
    }

    fn opened() -> Poll {
        let mut poll = empty();
        poll.open(params(2, 3600), NOW, 250).unwrap();
        poll
    }

    #[test]
    fn open_sets_up_an_empty_poll() {
        let poll = opened();
        assert_eq!(poll.cid, CID);
        assert_eq!(poll.options, 2);
        assert_eq!(poll.voters, 0);
        assert_eq!(poll.supply, 0);
        assert_eq!(poll.snapshot, 3);
        assert_eq!(poll.end, NOW + 3600);
        assert_eq!(poll.votes, vec![0, 0]);
    }

    #[test]
    fn open_rejects_bad_options() {
        let mut poll = empty();
        assert_eq!(
            poll.open(params(1, 3600), NOW, 0).unwrap_err(),
            SayDaoError::InvalidOptions.into()
        );
        assert_eq!(
            poll.open(params(MAX_POLL_OPTIONS as u8 + 1, 3600), NOW, 0)
                .unwrap_err(),
            SayDaoError::InvalidOptions.into()
        );
    }

    #[test]
    fn open_rejects_empty_window() {
        let mut poll = empty();
        assert_eq!(
            poll.open(params(2, 0), NOW, 0).unwrap_err(),
            SayDaoError::InvalidWindow.into()
        );
    }

    #[test]
    fn votes_are_weighted_by_balance() {
        let mut poll = opened();
        poll.cast_vote(1, 1, 100, 300, NOW + 1).unwrap();
        poll.cast_vote(2, 0, 50, 300, NOW + 2).unwrap();
        poll.cast_vote(3, 1, 25, 300, NOW + 3).unwrap();

        assert_eq!(poll.votes, vec![50, 125]);
        assert_eq!(poll.voters, 3);
        assert_eq!(poll.supply, 300);
    }

    #[test]
    fn second_vote_is_rejected_without_side_effects() {
        let mut poll = opened();
        poll.cast_vote(1, 1, 100, 300, NOW).unwrap();
        assert_eq!(
            poll.cast_vote(1, 0, 100, 300, NOW + 1).unwrap_err(),
            SayDaoError::AlreadyVoted.into()
        );
        assert_eq!(poll.votes, vec![0, 100]);
        assert_eq!(poll.voters, 1);
    }

    #[test]
    fn voting_window_is_half_open() {
        let mut poll = opened();
        assert_eq!(
            poll.cast_vote(1, 0, 1, 1, NOW + 3600).unwrap_err(),
            SayDaoError::VotingClosed.into()
        );
        assert_eq!(
            poll.cast_vote(1, 0, 1, 1, NOW - 1).unwrap_err(),
            SayDaoError::VotingClosed.into()
        );
        poll.cast_vote(1, 0, 1, 1, NOW + 3599).unwrap();
    }

    #[test]
    fn members_spread_over_every_cluster_can_vote() {
        let mut poll = opened();
        for index in 0..MAX_CLUSTER_INDEX {
            let voter = (index * CLUSTER_WIDTH + CLUSTER_WIDTH - 1) as u16;
            Member::validate_id(voter).unwrap();
            poll.cast_vote(voter, 1, 1, 1, NOW).unwrap();
        }
        assert_eq!(poll.voters, MAX_CLUSTER_INDEX);
        assert_eq!(poll.votes, vec![0, MAX_CLUSTER_INDEX as u64]);

        // The first identifier past the last cluster can never join
        assert_eq!(
            Member::validate_id(MAX_MEMBER_ID as u16).unwrap_err(),
            SayDaoError::InvalidMemberId.into()
        );
    }

    #[test]
    fn choice_must_be_an_option() {
        let mut poll = opened();
        assert_eq!(
            poll.cast_vote(1, 2, 1, 1, NOW).unwrap_err(),
            SayDaoError::InvalidOption.into()
        );
        assert!(!poll.ballots.contains(1));
    }
}

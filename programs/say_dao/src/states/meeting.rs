use anchor_lang::prelude::*;

use crate::errors::*;
use crate::states::{DistributionCursor, ParticipantSet};

/// A meeting bound to a meeting poll, stored at ["meeting", id].
///
/// Lifecycle:
/// 1. Created unsealed together with its poll
/// 2. After `end` the supervisor merges attendance bitmaps
/// 3. The supervisor seals the list, which freezes it for good
/// 4. Distribution walks the sealed list in batches until nothing remains
#[account]
#[derive(InitSpace)]
pub struct Meeting {
    pub id: u64,                    // 8 bytes

    /// Poll this meeting was created with
    pub poll_id: u64,               // 8 bytes

    /// Member id allowed to record attendance and distribute
    pub supervisor: u16,            // 2 bytes

    pub start: i64,                 // 8 bytes

    pub end: i64,                   // 8 bytes

    /// Popcount of `participants`
    pub total_participants: u32,    // 4 bytes

    pub sealed: bool,               // 1 byte

    /// Attendance bitmap
    pub participants: ParticipantSet,

    /// Next identifier position to distribute to
    pub cursor: DistributionCursor, // 3 bytes

    /// Participants the cursor has moved past, minted or skipped
    pub processed: u32,             // 4 bytes

    pub bump: u8,                   // 1 byte
}

/// A meeting must start in the future and end after it starts
pub fn validate_window(now: i64, start: i64, end: i64) -> Result<()> {
    require!(start > now, SayDaoError::InvalidWindow);
    require!(end > start, SayDaoError::InvalidWindow);
    Ok(())
}

impl Meeting {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    /// Initialize a freshly created meeting account
    pub fn schedule(
        &mut self,
        id: u64,
        poll_id: u64,
        supervisor: u16,
        start: i64,
        end: i64,
        now: i64,
        bump: u8,
    ) -> Result<()> {
        validate_window(now, start, end)?;

        self.id = id;
        self.poll_id = poll_id;
        self.supervisor = supervisor;
        self.start = start;
        self.end = end;
        self.total_participants = 0;
        self.sealed = false;
        self.participants = ParticipantSet::default();
        self.cursor = DistributionCursor::default();
        self.processed = 0;
        self.bump = bump;
        Ok(())
    }

    fn ensure_supervisor(&self, caller: u16) -> Result<()> {
        require!(caller == self.supervisor, SayDaoError::NotSupervisor);
        Ok(())
    }

    /// Merge an attendance bitmap for one cluster and return the new total
    pub fn update_participants(
        &mut self,
        caller: u16,
        now: i64,
        cluster_index: u16,
        bitmap: u128,
    ) -> Result<u32> {
        self.ensure_supervisor(caller)?;
        require!(now > self.end, SayDaoError::TooEarly);
        require!(!self.sealed, SayDaoError::AlreadySealed);

        self.participants.merge(cluster_index, bitmap)?;
        self.total_participants = self.participants.count();
        Ok(self.total_participants)
    }

    /// Freeze the participant list. There is no way back.
    ///
    /// Like `update_participants`, sealing is rejected with `TooEarly` until
    /// the meeting has ended (`now > end`). Returns true when the sealed list
    /// is empty, i.e. distribution is complete the moment it is sealed.
    pub fn seal(&mut self, caller: u16, now: i64) -> Result<bool> {
        self.ensure_supervisor(caller)?;
        require!(now > self.end, SayDaoError::TooEarly);
        require!(!self.sealed, SayDaoError::AlreadySealed);

        self.sealed = true;
        Ok(self.is_fully_distributed())
    }

    /// Advance the distribution by `batch_size` identifier positions and
    /// return the participants to credit
    pub fn distribute(&mut self, caller: u16, batch_size: u32) -> Result<Vec<u16>> {
        self.ensure_supervisor(caller)?;
        require!(self.sealed, SayDaoError::NotSealed);
        require!(batch_size > 0, SayDaoError::InvalidBatchSize);

        if self.remaining_distribution_clusters() == 0 {
            return Ok(Vec::new());
        }

        let batch = self.participants.scan(self.cursor, batch_size);

        self.processed = self
            .processed
            .checked_add(batch.recipients.len() as u32)
            .ok_or(SayDaoError::ArithmeticOverflow)?;
        self.cursor = batch.cursor;
        Ok(batch.recipients)
    }

    pub fn remaining_distribution_clusters(&self) -> u32 {
        self.participants.remaining_clusters(self.cursor)
    }

    pub fn next_distribution_bitmap(&self) -> u128 {
        self.participants.next_bitmap(self.cursor)
    }

    pub fn is_fully_distributed(&self) -> bool {
        self.sealed && self.remaining_distribution_clusters() == 0
    }
}

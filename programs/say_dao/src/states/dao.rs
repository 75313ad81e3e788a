use anchor_lang::prelude::*;

use crate::errors::*;

/// DAO root account, owner of the SayToken mint
#[account]
#[derive(InitSpace)]
pub struct Dao {
    /// Inviting authority; must co-sign every join
    pub authority: Pubkey,          // 32 bytes

    /// SayToken mint, minted by this PDA
    pub mint: Pubkey,               // 32 bytes

    /// Number of members that have joined
    pub member_count: u32,          // 4 bytes

    /// Id of the next poll
    pub poll_count: u64,            // 8 bytes

    /// Id of the next meeting
    pub meeting_count: u64,         // 8 bytes

    /// Bump seed for PDA verification
    pub bump: u8,                   // 1 byte

    /// Bump seed of the mint PDA
    pub mint_bump: u8,              // 1 byte
}

impl Dao {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    /// Count a new member and return the new member count
    pub fn register_member(&mut self) -> Result<u32> {
        self.member_count = self
            .member_count
            .checked_add(1)
            .ok_or(SayDaoError::ArithmeticOverflow)?;
        Ok(self.member_count)
    }

    /// Reserve the next poll id
    pub fn next_poll_id(&mut self) -> Result<u64> {
        let id = self.poll_count;
        self.poll_count = id.checked_add(1).ok_or(SayDaoError::ArithmeticOverflow)?;
        Ok(id)
    }

    /// Reserve the next meeting id
    pub fn next_meeting_id(&mut self) -> Result<u64> {
        let id = self.meeting_count;
        self.meeting_count = id.checked_add(1).ok_or(SayDaoError::ArithmeticOverflow)?;
        Ok(id)
    }
}

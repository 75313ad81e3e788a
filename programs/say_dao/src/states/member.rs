use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::*;

/// A joined member, stored at ["member", id]
#[account]
#[derive(InitSpace)]
pub struct Member {
    /// Identifier assigned by the invitation
    pub id: u16,                    // 2 bytes

    /// Wallet that signs for this member
    pub wallet: Pubkey,             // 32 bytes

    /// SayToken account that receives allocations and weighs votes
    pub token_account: Pubkey,      // 32 bytes

    pub joined_at: i64,             // 8 bytes

    pub bump: u8,                   // 1 byte
}

impl Member {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    /// PDA address of the member with identifier `id`
    pub fn address(id: u16) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[MEMBER_SEED, &id.to_le_bytes()], &crate::ID)
    }

    /// Identifiers must land in a cluster every participant set can hold
    pub fn validate_id(id: u16) -> Result<()> {
        require!((id as u32) < MAX_MEMBER_ID, SayDaoError::InvalidMemberId);
        Ok(())
    }
}

/// Wallet-keyed view of a member, stored at ["membership", wallet].
///
/// Signers are resolved through this record, so a wallet that never joined
/// points at an empty account.
#[account]
#[derive(InitSpace, Debug)]
pub struct Membership {
    pub member_id: u16,             // 2 bytes

    /// Same as `Member::token_account`
    pub token_account: Pubkey,      // 32 bytes

    pub bump: u8,                   // 1 byte
}

impl Membership {
    pub const LEN: usize = 8 + Self::INIT_SPACE;

    /// Read the membership record at `info`, failing with `missing` when the
    /// wallet never joined
    pub fn resolve(info: &AccountInfo, missing: SayDaoError) -> Result<Membership> {
        if info.data_is_empty() || *info.owner != crate::ID {
            return Err(missing.into());
        }
        let data = info.try_borrow_data()?;
        let membership = Membership::try_deserialize(&mut &data[..])?;
        Ok(membership)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_with(owner: Pubkey, mut data: Vec<u8>, missing: SayDaoError) -> Result<Membership> {
        let key = Pubkey::new_unique();
        let mut lamports = 1_000_000u64;
        let info = AccountInfo::new(
            &key,
            false,
            false,
            &mut lamports,
            &mut data,
            &owner,
            false,
            0,
        );
        Membership::resolve(&info, missing)
    }

    fn serialized(member_id: u16, token_account: Pubkey) -> Vec<u8> {
        let mut data = Vec::new();
        Membership {
            member_id,
            token_account,
            bump: 254,
        }
        .try_serialize(&mut data)
        .unwrap();
        data
    }

    #[test]
    fn wallet_that_never_joined_is_not_a_member() {
        let err = resolve_with(Pubkey::default(), Vec::new(), SayDaoError::NotAMember).unwrap_err();
        assert_eq!(err, SayDaoError::NotAMember.into());
    }

    #[test]
    fn missing_membership_maps_to_the_requested_error() {
        let err = resolve_with(Pubkey::default(), Vec::new(), SayDaoError::NotSupervisor)
            .unwrap_err();
        assert_eq!(err, SayDaoError::NotSupervisor.into());
    }

    #[test]
    fn foreign_account_is_not_a_member() {
        let data = serialized(3, Pubkey::new_unique());
        let err = resolve_with(Pubkey::new_unique(), data, SayDaoError::NotAMember).unwrap_err();
        assert_eq!(err, SayDaoError::NotAMember.into());
    }

    #[test]
    fn joined_wallet_resolves_to_its_member() {
        let tokens = Pubkey::new_unique();
        let membership = resolve_with(crate::ID, serialized(666, tokens), SayDaoError::NotAMember)
            .unwrap();
        assert_eq!(membership.member_id, 666);
        assert_eq!(membership.token_account, tokens);
    }

    #[test]
    fn member_ids_stay_inside_participant_capacity() {
        Member::validate_id(0).unwrap();
        Member::validate_id((MAX_MEMBER_ID - 1) as u16).unwrap();
        assert_eq!(
            Member::validate_id(MAX_MEMBER_ID as u16).unwrap_err(),
            SayDaoError::InvalidMemberId.into()
        );
        assert_eq!(
            Member::validate_id(u16::MAX).unwrap_err(),
            SayDaoError::InvalidMemberId.into()
        );
    }
}

//! Update fee instruction
//!
//! Changes the transfer fee rate and recipient. The same pairing rule as
//! creation applies: a recipient exactly when the rate is nonzero.
//!
//! Accounts:
//! 0. [signer] Authority
//! 1. [writable] TokenManager PDA
//!
//! Instruction data:
//! - [0..2]  new_basis_points: u16 LE
//! - [2]     recipient tag (0 = absent, 1 = present)
//! - [3..35] new recipient pubkey (only when the tag is 1)

use crate::{
    error::TokenManagerError,
    state::{validate_fee_config, TokenManager},
};
use pinocchio::{
    account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};

/// Parse the update_fee payload into the rate and the tagged recipient.
pub fn parse_fee_update(data: &[u8]) -> Result<(u16, Option<Pubkey>), ProgramError> {
    if data.len() < 3 {
        return Err(ProgramError::InvalidInstructionData);
    }
    let basis_points = u16::from_le_bytes(
        data[0..2]
            .try_into()
            .map_err(|_| ProgramError::InvalidInstructionData)?,
    );
    let recipient = match data[2] {
        0 => None,
        1 => {
            if data.len() < 35 {
                return Err(ProgramError::InvalidInstructionData);
            }
            let mut key = [0u8; 32];
            key.copy_from_slice(&data[3..35]);
            Some(key)
        }
        _ => return Err(ProgramError::InvalidInstructionData),
    };
    Ok((basis_points, recipient))
}

pub fn process(_program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let [authority, manager_account] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !authority.is_signer() {
        return Err(TokenManagerError::AccountNotSigner.into());
    }

    if !manager_account.is_writable() {
        return Err(TokenManagerError::AccountNotWritable.into());
    }

    let manager_data = unsafe { manager_account.borrow_mut_data_unchecked() };
    if manager_data.len() < TokenManager::SIZE {
        return Err(TokenManagerError::InvalidAccountData.into());
    }
    if manager_data[0..8] != TokenManager::DISCRIMINATOR {
        return Err(TokenManagerError::InvalidPdaSeeds.into());
    }

    if &manager_data[TokenManager::AUTHORITY_OFFSET..TokenManager::AUTHORITY_OFFSET + 32]
        != authority.key().as_ref()
    {
        return Err(TokenManagerError::InvalidAuthority.into());
    }

    let (basis_points, recipient) = parse_fee_update(data)?;
    validate_fee_config(basis_points, recipient.is_some())?;

    manager_data[TokenManager::TRANSFER_FEE_BPS_OFFSET..TokenManager::TRANSFER_FEE_BPS_OFFSET + 2]
        .copy_from_slice(&basis_points.to_le_bytes());
    match recipient {
        Some(key) => {
            manager_data
                [TokenManager::FEE_RECIPIENT_OFFSET..TokenManager::FEE_RECIPIENT_OFFSET + 32]
                .copy_from_slice(key.as_ref());
            manager_data[TokenManager::HAS_FEE_RECIPIENT_OFFSET] = 1;
        }
        None => {
            manager_data
                [TokenManager::FEE_RECIPIENT_OFFSET..TokenManager::FEE_RECIPIENT_OFFSET + 32]
                .copy_from_slice(&[0u8; 32]);
            manager_data[TokenManager::HAS_FEE_RECIPIENT_OFFSET] = 0;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fee_update() {
        let mut data = vec![0u8; 35];
        data[0..2].copy_from_slice(&500u16.to_le_bytes());
        data[2] = 1;
        data[3..35].copy_from_slice(&[4u8; 32]);

        let (bps, recipient) = parse_fee_update(&data).unwrap();
        assert_eq!(bps, 500);
        assert_eq!(recipient, Some([4u8; 32]));

        // Absent recipient needs only the tag
        let (bps, recipient) = parse_fee_update(&[0, 0, 0]).unwrap();
        assert_eq!(bps, 0);
        assert_eq!(recipient, None);
    }

    #[test]
    fn test_parse_fee_update_rejects_short_or_bad_tag() {
        assert!(parse_fee_update(&[]).is_err());
        assert!(parse_fee_update(&[0, 0]).is_err());
        // Tag says present but the key is missing
        assert!(parse_fee_update(&[0, 0, 1]).is_err());
        // Unknown tag
        assert!(parse_fee_update(&[0, 0, 2]).is_err());
    }
}

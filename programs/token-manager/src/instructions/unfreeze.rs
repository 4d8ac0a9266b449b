//! Unfreeze instruction
//!
//! Clears the frozen flag set by freeze, re-enabling mint and burn.
//!
//! Accounts:
//! 0. [signer] Authority
//! 1. [writable] TokenManager PDA

use crate::{error::TokenManagerError, state::TokenManager};
use pinocchio::{
    account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};

pub fn process(_program_id: &Pubkey, accounts: &[AccountInfo], _data: &[u8]) -> ProgramResult {
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

    if manager_data[TokenManager::IS_FREEZABLE_OFFSET] == 0 {
        return Err(TokenManagerError::NotFreezable.into());
    }

    if manager_data[TokenManager::IS_FROZEN_OFFSET] == 0 {
        return Err(TokenManagerError::NotFrozen.into());
    }

    manager_data[TokenManager::IS_FROZEN_OFFSET] = 0;

    Ok(())
}

//! Burn instruction
//!
//! Burns tokens from a source account the authority controls. Permitted only
//! for the manager authority, only when the token is burnable and not
//! frozen, and only up to the current supply.
//!
//! Accounts:
//! 0. [signer] Authority
//! 1. [writable] TokenManager PDA
//! 2. [writable] Mint account
//! 3. [writable] Source token account
//! 4. [] Token program
//!
//! Instruction data:
//! - [0..8] amount: u64 LE

use crate::{error::TokenManagerError, state::TokenManager};
use pinocchio::{
    account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey, ProgramResult,
};
use pinocchio_log::log;

/// Compute the supply after burning `amount`. Burning more than the current
/// supply is rejected.
pub fn burn_supply(current_supply: u64, amount: u64) -> Result<u64, TokenManagerError> {
    if amount == 0 {
        return Err(TokenManagerError::InvalidAmount);
    }
    current_supply
        .checked_sub(amount)
        .ok_or(TokenManagerError::InsufficientSupply)
}

pub fn process(_program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let [authority, manager_account, mint_account, source, _token_program] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !authority.is_signer() {
        return Err(TokenManagerError::AccountNotSigner.into());
    }

    if !manager_account.is_writable() {
        return Err(TokenManagerError::AccountNotWritable.into());
    }

    // Validate manager account
    let manager_data = unsafe { manager_account.borrow_mut_data_unchecked() };
    if manager_data.len() < TokenManager::SIZE {
        return Err(TokenManagerError::InvalidAccountData.into());
    }
    if manager_data[0..8] != TokenManager::DISCRIMINATOR {
        return Err(TokenManagerError::InvalidPdaSeeds.into());
    }

    // The mint must be the one this manager governs
    if &manager_data[TokenManager::MINT_OFFSET..TokenManager::MINT_OFFSET + 32]
        != mint_account.key().as_ref()
    {
        return Err(TokenManagerError::InvalidMintAccount.into());
    }

    // Validate authority matches
    if &manager_data[TokenManager::AUTHORITY_OFFSET..TokenManager::AUTHORITY_OFFSET + 32]
        != authority.key().as_ref()
    {
        return Err(TokenManagerError::InvalidAuthority.into());
    }

    if manager_data[TokenManager::IS_BURNABLE_OFFSET] == 0 {
        return Err(TokenManagerError::NotBurnable.into());
    }

    if manager_data[TokenManager::IS_FROZEN_OFFSET] != 0 {
        return Err(TokenManagerError::TokenFrozen.into());
    }

    if data.len() < 8 {
        return Err(ProgramError::InvalidInstructionData);
    }
    let amount = u64::from_le_bytes(
        data[0..8]
            .try_into()
            .map_err(|_| ProgramError::InvalidInstructionData)?,
    );

    let current_supply = u64::from_le_bytes(
        manager_data[TokenManager::CURRENT_SUPPLY_OFFSET..TokenManager::CURRENT_SUPPLY_OFFSET + 8]
            .try_into()
            .map_err(|_| TokenManagerError::InvalidAccountData)?,
    );

    let new_supply = burn_supply(current_supply, amount)?;

    // The authority signs for its own token account
    pinocchio_token::instructions::Burn {
        account: source,
        mint: mint_account,
        authority,
        amount,
    }
    .invoke()?;

    manager_data[TokenManager::CURRENT_SUPPLY_OFFSET..TokenManager::CURRENT_SUPPLY_OFFSET + 8]
        .copy_from_slice(&new_supply.to_le_bytes());

    log!("burn: amount={}", amount);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burn_within_supply() {
        assert_eq!(burn_supply(1000, 1000), Ok(0));
        assert_eq!(burn_supply(1000, 1), Ok(999));
    }

    #[test]
    fn test_burn_underflow() {
        assert_eq!(
            burn_supply(0, 1),
            Err(TokenManagerError::InsufficientSupply)
        );
        assert_eq!(
            burn_supply(999, 1000),
            Err(TokenManagerError::InsufficientSupply)
        );
    }

    #[test]
    fn test_burn_zero_amount() {
        assert_eq!(burn_supply(1000, 0), Err(TokenManagerError::InvalidAmount));
    }
}

//! Mint instruction
//!
//! Mints new tokens to a destination account. Permitted only for the manager
//! authority, only when the token is mintable and not frozen, and only while
//! the result stays within max supply.
//!
//! Accounts:
//! 0. [signer] Authority
//! 1. [writable] TokenManager PDA
//! 2. [writable] Mint account
//! 3. [writable] Destination token account
//! 4. [] Token program
//!
//! Instruction data:
//! - [0..8] amount: u64 LE

use crate::{error::TokenManagerError, state::TokenManager};
use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    pubkey::Pubkey,
    ProgramResult,
};
use pinocchio_log::log;

/// Compute the supply after minting `amount`, enforcing the max supply
/// bound. Amounts that do not fit are rejected, never clamped.
pub fn mint_supply(
    current_supply: u64,
    max_supply: u64,
    amount: u64,
) -> Result<u64, TokenManagerError> {
    if amount == 0 {
        return Err(TokenManagerError::InvalidAmount);
    }
    let new_supply = current_supply
        .checked_add(amount)
        .ok_or(TokenManagerError::Overflow)?;
    if new_supply > max_supply {
        return Err(TokenManagerError::MaxSupplyExceeded);
    }
    Ok(new_supply)
}

pub fn process(_program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let [authority, manager_account, mint_account, destination, _token_program] = accounts else {
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

    if manager_data[TokenManager::IS_MINTABLE_OFFSET] == 0 {
        return Err(TokenManagerError::NotMintable.into());
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
    let max_supply = u64::from_le_bytes(
        manager_data[TokenManager::MAX_SUPPLY_OFFSET..TokenManager::MAX_SUPPLY_OFFSET + 8]
            .try_into()
            .map_err(|_| TokenManagerError::InvalidAccountData)?,
    );

    let new_supply = mint_supply(current_supply, max_supply, amount)?;

    // The manager PDA is the mint authority; sign the CPI with its seeds
    let bump_seed = [manager_data[TokenManager::BUMP_OFFSET]];
    let signer_seeds = [
        Seed::from(TokenManager::SEEDS_PREFIX),
        Seed::from(mint_account.key().as_ref()),
        Seed::from(&bump_seed),
    ];
    let signer = Signer::from(&signer_seeds);

    pinocchio_token::instructions::MintTo {
        mint: mint_account,
        account: destination,
        mint_authority: manager_account,
        amount,
    }
    .invoke_signed(&[signer])?;

    manager_data[TokenManager::CURRENT_SUPPLY_OFFSET..TokenManager::CURRENT_SUPPLY_OFFSET + 8]
        .copy_from_slice(&new_supply.to_le_bytes());

    log!("mint: amount={}", amount);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_within_headroom() {
        assert_eq!(mint_supply(0, 1000, 1000), Ok(1000));
        assert_eq!(mint_supply(400, 1000, 100), Ok(500));
    }

    #[test]
    fn test_mint_exceeds_max_supply() {
        assert_eq!(
            mint_supply(0, 1000, 1001),
            Err(TokenManagerError::MaxSupplyExceeded)
        );
        assert_eq!(
            mint_supply(999, 1000, 2),
            Err(TokenManagerError::MaxSupplyExceeded)
        );
    }

    #[test]
    fn test_mint_overflow() {
        assert_eq!(
            mint_supply(u64::MAX, u64::MAX, 1),
            Err(TokenManagerError::Overflow)
        );
    }

    #[test]
    fn test_mint_zero_amount() {
        assert_eq!(mint_supply(0, 1000, 0), Err(TokenManagerError::InvalidAmount));
    }
}

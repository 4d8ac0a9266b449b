//! Create token instruction
//!
//! Creates the SPL mint and the TokenManager PDA carrying the token's
//! metadata, capability flags and supply policy. The manager PDA becomes the
//! mint authority (and freeze authority when freezable), so supply can only
//! move through this program.
//!
//! Accounts:
//! 0. [signer] Authority (payer)
//! 1. [writable] TokenManager PDA
//! 2. [writable, signer] Mint account (created by this instruction)
//! 3. [] System program
//! 4. [] Token program
//!
//! Instruction data: see [`CreateTokenParams`].

use crate::{
    error::TokenManagerError,
    state::{CreateTokenParams, TokenManager},
};
use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    pubkey::{find_program_address, Pubkey},
    sysvars::{clock::Clock, rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_token::state::Mint;

pub fn process(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    let [authority, manager_account, mint_account, _system_program, _token_program] = accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !authority.is_signer() {
        return Err(TokenManagerError::AccountNotSigner.into());
    }

    // The mint keypair must co-sign so a manager can never be attached to a
    // mint the caller does not control.
    if !mint_account.is_signer() {
        return Err(TokenManagerError::AccountNotSigner.into());
    }

    if !manager_account.is_writable() {
        return Err(TokenManagerError::AccountNotWritable.into());
    }

    if !mint_account.is_writable() {
        return Err(TokenManagerError::AccountNotWritable.into());
    }

    let params = CreateTokenParams::parse(data)?;
    params.validate()?;

    // Derive and validate the manager PDA
    let (expected_manager, bump) = find_program_address(
        &[TokenManager::SEEDS_PREFIX, mint_account.key().as_ref()],
        program_id,
    );
    if manager_account.key() != &expected_manager {
        return Err(TokenManagerError::InvalidPdaSeeds.into());
    }

    // Creation is rejected, never merged, when a manager already exists
    if !manager_account.data_is_empty() {
        return Err(TokenManagerError::AlreadyInitialized.into());
    }

    if !mint_account.data_is_empty() {
        return Err(TokenManagerError::InvalidMintAccount.into());
    }

    let rent = Rent::get()?;

    // Create the mint and hand its authority to the manager PDA
    pinocchio_system::instructions::CreateAccount {
        from: authority,
        to: mint_account,
        lamports: rent.minimum_balance(Mint::LEN),
        space: Mint::LEN as u64,
        owner: &pinocchio_token::ID,
    }
    .invoke()?;

    let freeze_authority = params.is_freezable.then_some(&expected_manager);
    pinocchio_token::instructions::InitializeMint2 {
        mint: mint_account,
        decimals: params.decimals,
        mint_authority: &expected_manager,
        freeze_authority,
    }
    .invoke()?;

    // Create the manager PDA
    let bump_seed = [bump];
    let signer_seeds = [
        Seed::from(TokenManager::SEEDS_PREFIX),
        Seed::from(mint_account.key().as_ref()),
        Seed::from(&bump_seed),
    ];
    let signer = Signer::from(&signer_seeds);

    pinocchio_system::instructions::CreateAccount {
        from: authority,
        to: manager_account,
        lamports: rent.minimum_balance(TokenManager::SIZE),
        space: TokenManager::SIZE as u64,
        owner: program_id,
    }
    .invoke_signed(&[signer])?;

    let clock = Clock::get()?;
    let manager_data = unsafe { manager_account.borrow_mut_data_unchecked() };

    manager_data[0..8].copy_from_slice(&TokenManager::DISCRIMINATOR);
    manager_data[TokenManager::AUTHORITY_OFFSET..TokenManager::AUTHORITY_OFFSET + 32]
        .copy_from_slice(authority.key().as_ref());
    manager_data[TokenManager::MINT_OFFSET..TokenManager::MINT_OFFSET + 32]
        .copy_from_slice(mint_account.key().as_ref());
    match params.fee_recipient {
        Some(recipient) => {
            manager_data
                [TokenManager::FEE_RECIPIENT_OFFSET..TokenManager::FEE_RECIPIENT_OFFSET + 32]
                .copy_from_slice(recipient.as_ref());
            manager_data[TokenManager::HAS_FEE_RECIPIENT_OFFSET] = 1;
        }
        None => {
            manager_data
                [TokenManager::FEE_RECIPIENT_OFFSET..TokenManager::FEE_RECIPIENT_OFFSET + 32]
                .copy_from_slice(&[0u8; 32]);
            manager_data[TokenManager::HAS_FEE_RECIPIENT_OFFSET] = 0;
        }
    }
    manager_data[TokenManager::MAX_SUPPLY_OFFSET..TokenManager::MAX_SUPPLY_OFFSET + 8]
        .copy_from_slice(&params.max_supply.to_le_bytes());
    manager_data[TokenManager::CURRENT_SUPPLY_OFFSET..TokenManager::CURRENT_SUPPLY_OFFSET + 8]
        .copy_from_slice(&0u64.to_le_bytes());
    manager_data[TokenManager::CREATED_AT_OFFSET..TokenManager::CREATED_AT_OFFSET + 8]
        .copy_from_slice(&clock.unix_timestamp.to_le_bytes());
    manager_data[TokenManager::TRANSFER_FEE_BPS_OFFSET..TokenManager::TRANSFER_FEE_BPS_OFFSET + 2]
        .copy_from_slice(&params.transfer_fee_basis_points.to_le_bytes());
    manager_data[TokenManager::DECIMALS_OFFSET] = params.decimals;
    manager_data[TokenManager::IS_MINTABLE_OFFSET] = params.is_mintable as u8;
    manager_data[TokenManager::IS_FREEZABLE_OFFSET] = params.is_freezable as u8;
    manager_data[TokenManager::IS_BURNABLE_OFFSET] = params.is_burnable as u8;
    manager_data[TokenManager::IS_FROZEN_OFFSET] = 0;
    manager_data[TokenManager::NAME_LEN_OFFSET] = params.name.len() as u8;
    manager_data[TokenManager::NAME_OFFSET..TokenManager::NAME_OFFSET + params.name.len()]
        .copy_from_slice(params.name);
    manager_data[TokenManager::SYMBOL_LEN_OFFSET] = params.symbol.len() as u8;
    manager_data[TokenManager::SYMBOL_OFFSET..TokenManager::SYMBOL_OFFSET + params.symbol.len()]
        .copy_from_slice(params.symbol);
    manager_data[TokenManager::URI_LEN_OFFSET] = params.uri.len() as u8;
    manager_data[TokenManager::URI_OFFSET..TokenManager::URI_OFFSET + params.uri.len()]
        .copy_from_slice(params.uri);
    manager_data[TokenManager::BUMP_OFFSET] = bump;

    log!("create_token: max_supply={}", params.max_supply);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenManagerError;

    fn encode(
        decimals: u8,
        max_supply: u64,
        fee_bps: u16,
        flags: [bool; 3],
        fee_recipient: Option<[u8; 32]>,
        name: &[u8],
        symbol: &[u8],
        uri: &[u8],
    ) -> Vec<u8> {
        let mut data = Vec::new();
        data.push(decimals);
        data.extend_from_slice(&max_supply.to_le_bytes());
        data.extend_from_slice(&fee_bps.to_le_bytes());
        data.push(flags[0] as u8);
        data.push(flags[1] as u8);
        data.push(flags[2] as u8);
        match fee_recipient {
            Some(key) => {
                data.push(1);
                data.extend_from_slice(&key);
            }
            None => data.push(0),
        }
        data.push(name.len() as u8);
        data.extend_from_slice(name);
        data.push(symbol.len() as u8);
        data.extend_from_slice(symbol);
        data.push(uri.len() as u8);
        data.extend_from_slice(uri);
        data
    }

    #[test]
    fn test_parse_roundtrip() {
        let recipient = [7u8; 32];
        let data = encode(
            9,
            1_000_000_000,
            250,
            [true, false, true],
            Some(recipient),
            b"My Token",
            b"MYT",
            b"https://example.com/meta.json",
        );

        let params = CreateTokenParams::parse(&data).unwrap();
        assert_eq!(params.decimals, 9);
        assert_eq!(params.max_supply, 1_000_000_000);
        assert_eq!(params.transfer_fee_basis_points, 250);
        assert!(params.is_mintable);
        assert!(!params.is_freezable);
        assert!(params.is_burnable);
        assert_eq!(params.fee_recipient, Some(recipient));
        assert_eq!(params.name, b"My Token");
        assert_eq!(params.symbol, b"MYT");
        assert_eq!(params.uri, b"https://example.com/meta.json");
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_parse_rejects_truncated_payload() {
        let data = encode(
            6,
            1000,
            0,
            [true, true, true],
            None,
            b"Tok",
            b"TOK",
            b"",
        );

        // Every prefix of a valid payload must be rejected, not misread.
        for len in 0..data.len() {
            assert!(CreateTokenParams::parse(&data[..len]).is_err());
        }
        assert!(CreateTokenParams::parse(&data).is_ok());
    }

    #[test]
    fn test_parse_rejects_bad_recipient_tag() {
        let mut data = encode(6, 1000, 0, [true, true, true], None, b"Tok", b"TOK", b"");
        data[14] = 2;
        assert!(CreateTokenParams::parse(&data).is_err());
    }

    #[test]
    fn test_validate_fee_pairing() {
        // Nonzero fee with no recipient
        let data = encode(9, 1000, 100, [true, true, true], None, b"Tok", b"TOK", b"");
        let params = CreateTokenParams::parse(&data).unwrap();
        assert_eq!(
            params.validate(),
            Err(TokenManagerError::FeeRecipientMismatch)
        );

        // Zero fee with a recipient
        let data = encode(
            9,
            1000,
            0,
            [true, true, true],
            Some([9u8; 32]),
            b"Tok",
            b"TOK",
            b"",
        );
        let params = CreateTokenParams::parse(&data).unwrap();
        assert_eq!(
            params.validate(),
            Err(TokenManagerError::FeeRecipientMismatch)
        );
    }
}

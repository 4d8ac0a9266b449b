//! Token Manager Program State

use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

use crate::error::TokenManagerError;

/// Token manager PDA, one per token
/// Seeds: ["token_manager", mint]
///
/// Size: 8 + 32 + 32 + 32 + 8 + 8 + 8 + 2 + 6 + 1 + 32 + 1 + 10 + 1 + 200 + 1 + 2 = 384 bytes
#[repr(C)]
pub struct TokenManager {
    /// Discriminator for account type
    pub discriminator: [u8; 8],
    /// Authority allowed to mint, burn, freeze and change the fee
    pub authority: [u8; 32],
    /// The SPL mint this manager governs
    pub mint: [u8; 32],
    /// Account receiving transfer fees (zeroed when absent)
    pub fee_recipient: [u8; 32],
    /// Upper bound on current_supply, fixed at creation
    pub max_supply: u64,
    /// Supply minted through this program, net of burns
    pub current_supply: u64,
    /// Creation timestamp
    pub created_at: i64,
    /// Per-transfer fee rate in basis points (10000 = 100%)
    pub transfer_fee_basis_points: u16,
    /// Fixed-point precision, fixed at creation
    pub decimals: u8,
    /// Whether mint is ever permitted (fixed at creation)
    pub is_mintable: u8,
    /// Whether freeze is ever permitted (fixed at creation)
    pub is_freezable: u8,
    /// Whether burn is ever permitted (fixed at creation)
    pub is_burnable: u8,
    /// When set, mint and burn fail until unfreeze
    pub is_frozen: u8,
    /// Presence tag for fee_recipient
    pub has_fee_recipient: u8,
    /// Length of the name in bytes
    pub name_len: u8,
    /// Token name, UTF-8, zero-padded
    pub name: [u8; 32],
    /// Length of the symbol in bytes
    pub symbol_len: u8,
    /// Token symbol, UTF-8, zero-padded
    pub symbol: [u8; 10],
    /// Length of the uri in bytes
    pub uri_len: u8,
    /// Metadata uri, UTF-8, zero-padded, may be empty
    pub uri: [u8; 200],
    /// PDA bump seed
    pub bump: u8,
    /// Padding for alignment
    pub _padding: [u8; 2],
}

impl TokenManager {
    /// Account discriminator
    pub const DISCRIMINATOR: [u8; 8] = *b"tokenmgr";

    /// Size of the TokenManager account
    pub const SIZE: usize = 384;

    /// PDA seed prefix, completed by the mint address
    pub const SEEDS_PREFIX: &'static [u8] = b"token_manager";

    /// Maximum name length in bytes
    pub const MAX_NAME_LEN: usize = 32;

    /// Maximum symbol length in bytes
    pub const MAX_SYMBOL_LEN: usize = 10;

    /// Maximum uri length in bytes
    pub const MAX_URI_LEN: usize = 200;

    /// Maximum supported decimals
    pub const MAX_DECIMALS: u8 = 9;

    /// Maximum fee rate in basis points (100%)
    pub const MAX_FEE_BPS: u16 = 10000;

    // Field offsets into the serialized account data. Every handler reads
    // and writes through these so the layout lives in one place.
    pub const AUTHORITY_OFFSET: usize = 8;
    pub const MINT_OFFSET: usize = 40;
    pub const FEE_RECIPIENT_OFFSET: usize = 72;
    pub const MAX_SUPPLY_OFFSET: usize = 104;
    pub const CURRENT_SUPPLY_OFFSET: usize = 112;
    pub const CREATED_AT_OFFSET: usize = 120;
    pub const TRANSFER_FEE_BPS_OFFSET: usize = 128;
    pub const DECIMALS_OFFSET: usize = 130;
    pub const IS_MINTABLE_OFFSET: usize = 131;
    pub const IS_FREEZABLE_OFFSET: usize = 132;
    pub const IS_BURNABLE_OFFSET: usize = 133;
    pub const IS_FROZEN_OFFSET: usize = 134;
    pub const HAS_FEE_RECIPIENT_OFFSET: usize = 135;
    pub const NAME_LEN_OFFSET: usize = 136;
    pub const NAME_OFFSET: usize = 137;
    pub const SYMBOL_LEN_OFFSET: usize = 169;
    pub const SYMBOL_OFFSET: usize = 170;
    pub const URI_LEN_OFFSET: usize = 180;
    pub const URI_OFFSET: usize = 181;
    pub const BUMP_OFFSET: usize = 381;
}

/// Validate a fee configuration: the rate must be within [0, 10000] basis
/// points and a recipient must be present exactly when the rate is nonzero.
pub fn validate_fee_config(
    basis_points: u16,
    has_recipient: bool,
) -> Result<(), TokenManagerError> {
    if basis_points > TokenManager::MAX_FEE_BPS {
        return Err(TokenManagerError::InvalidTransferFeeBps);
    }
    if (basis_points > 0) != has_recipient {
        return Err(TokenManagerError::FeeRecipientMismatch);
    }
    Ok(())
}

/// Creation parameters carried in the create_token instruction data.
///
/// Wire layout:
/// - [0]      decimals: u8
/// - [1..9]   max_supply: u64 LE
/// - [9..11]  transfer_fee_basis_points: u16 LE
/// - [11]     is_mintable (0 or 1)
/// - [12]     is_freezable (0 or 1)
/// - [13]     is_burnable (0 or 1)
/// - [14]     fee recipient tag (0 = absent, 1 = present)
/// - [15..47] fee_recipient pubkey (only when the tag is 1)
/// - then name_len u8 + name bytes, symbol_len u8 + symbol bytes,
///   uri_len u8 + uri bytes
pub struct CreateTokenParams<'a> {
    pub name: &'a [u8],
    pub symbol: &'a [u8],
    pub uri: &'a [u8],
    pub decimals: u8,
    pub max_supply: u64,
    pub is_mintable: bool,
    pub is_freezable: bool,
    pub is_burnable: bool,
    pub transfer_fee_basis_points: u16,
    pub fee_recipient: Option<Pubkey>,
}

impl<'a> CreateTokenParams<'a> {
    /// Parse the create_token payload. Shape errors only; domain rules are
    /// checked by [`CreateTokenParams::validate`].
    pub fn parse(data: &'a [u8]) -> Result<Self, ProgramError> {
        if data.len() < 15 {
            return Err(ProgramError::InvalidInstructionData);
        }

        let decimals = data[0];
        let max_supply = u64::from_le_bytes(
            data[1..9]
                .try_into()
                .map_err(|_| ProgramError::InvalidInstructionData)?,
        );
        let transfer_fee_basis_points = u16::from_le_bytes(
            data[9..11]
                .try_into()
                .map_err(|_| ProgramError::InvalidInstructionData)?,
        );
        let is_mintable = data[11] != 0;
        let is_freezable = data[12] != 0;
        let is_burnable = data[13] != 0;

        let mut cursor = 15;
        let fee_recipient = match data[14] {
            0 => None,
            1 => {
                if data.len() < cursor + 32 {
                    return Err(ProgramError::InvalidInstructionData);
                }
                let mut key = [0u8; 32];
                key.copy_from_slice(&data[cursor..cursor + 32]);
                cursor += 32;
                Some(key)
            }
            _ => return Err(ProgramError::InvalidInstructionData),
        };

        let (name, cursor) = read_length_prefixed(data, cursor)?;
        let (symbol, cursor) = read_length_prefixed(data, cursor)?;
        let (uri, _) = read_length_prefixed(data, cursor)?;

        Ok(Self {
            name,
            symbol,
            uri,
            decimals,
            max_supply,
            is_mintable,
            is_freezable,
            is_burnable,
            transfer_fee_basis_points,
            fee_recipient,
        })
    }

    /// Enforce the creation invariants. Nothing is persisted before this
    /// passes.
    pub fn validate(&self) -> Result<(), TokenManagerError> {
        if self.name.is_empty()
            || self.name.len() > TokenManager::MAX_NAME_LEN
            || core::str::from_utf8(self.name).is_err()
        {
            return Err(TokenManagerError::InvalidName);
        }
        if self.symbol.is_empty()
            || self.symbol.len() > TokenManager::MAX_SYMBOL_LEN
            || core::str::from_utf8(self.symbol).is_err()
        {
            return Err(TokenManagerError::InvalidSymbol);
        }
        if self.uri.len() > TokenManager::MAX_URI_LEN
            || core::str::from_utf8(self.uri).is_err()
        {
            return Err(TokenManagerError::InvalidUri);
        }
        if self.decimals > TokenManager::MAX_DECIMALS {
            return Err(TokenManagerError::InvalidDecimals);
        }
        if self.max_supply == 0 {
            return Err(TokenManagerError::InvalidMaxSupply);
        }
        validate_fee_config(
            self.transfer_fee_basis_points,
            self.fee_recipient.is_some(),
        )
    }
}

/// Read a u8-length-prefixed byte slice starting at `offset`, returning the
/// slice and the offset past it.
fn read_length_prefixed(data: &[u8], offset: usize) -> Result<(&[u8], usize), ProgramError> {
    let len = *data
        .get(offset)
        .ok_or(ProgramError::InvalidInstructionData)? as usize;
    let start = offset + 1;
    let end = start + len;
    if data.len() < end {
        return Err(ProgramError::InvalidInstructionData);
    }
    Ok((&data[start..end], end))
}

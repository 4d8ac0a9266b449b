//! Token Manager Program Errors

use pinocchio::program_error::ProgramError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TokenManagerError {
    /// Name is empty, too long or not UTF-8
    InvalidName = 0,
    /// Symbol is empty, too long or not UTF-8
    InvalidSymbol = 1,
    /// Uri is too long or not UTF-8
    InvalidUri = 2,
    /// Decimals above the supported maximum
    InvalidDecimals = 3,
    /// Max supply must be greater than zero
    InvalidMaxSupply = 4,
    /// Transfer fee above 10000 basis points
    InvalidTransferFeeBps = 5,
    /// Fee recipient must be present exactly when the fee rate is nonzero
    FeeRecipientMismatch = 6,
    /// Mint or burn amount must be greater than zero
    InvalidAmount = 7,
    /// Signer does not match the manager authority
    InvalidAuthority = 8,
    /// Token was created without the mintable capability
    NotMintable = 9,
    /// Token was created without the freezable capability
    NotFreezable = 10,
    /// Token was created without the burnable capability
    NotBurnable = 11,
    /// Mint would push current supply above max supply
    MaxSupplyExceeded = 12,
    /// Burn amount exceeds current supply
    InsufficientSupply = 13,
    /// Token is frozen
    TokenFrozen = 14,
    /// Token is already frozen
    AlreadyFrozen = 15,
    /// Token is not frozen
    NotFrozen = 16,
    /// A manager already exists for this mint
    AlreadyInitialized = 17,
    /// Invalid PDA seeds
    InvalidPdaSeeds = 18,
    /// Arithmetic overflow
    Overflow = 19,
    /// Account not writable
    AccountNotWritable = 20,
    /// Account not signer
    AccountNotSigner = 21,
    /// Invalid account data
    InvalidAccountData = 22,
    /// Invalid mint account
    InvalidMintAccount = 23,
}

impl From<TokenManagerError> for ProgramError {
    fn from(e: TokenManagerError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

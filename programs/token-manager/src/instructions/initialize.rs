//! Initialize instruction
//!
//! Reachability probe with no state effect. Clients ping this before
//! submitting real work; accounts and data are ignored.

use pinocchio::{account_info::AccountInfo, pubkey::Pubkey, ProgramResult};
use pinocchio_log::log;

pub fn process(_program_id: &Pubkey, _accounts: &[AccountInfo], _data: &[u8]) -> ProgramResult {
    log!("token-manager: online");
    Ok(())
}

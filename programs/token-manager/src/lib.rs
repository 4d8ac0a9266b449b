//! Token Manager Program
//!
//! Creates fungible tokens and manages their configuration and supply policy.
//! - Creates the SPL mint and a TokenManager PDA per token
//! - Capability flags fixed at creation gate mint, burn and freeze
//! - Supply can only move through this program, within [0, max_supply]

pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;
use pinocchio::{
    account_info::AccountInfo, entrypoint, program_error::ProgramError, pubkey::Pubkey,
    ProgramResult,
};

entrypoint!(process_instruction);

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if instruction_data.is_empty() {
        return Err(ProgramError::InvalidInstructionData);
    }

    match instruction_data[0] {
        0 => initialize::process(program_id, accounts, &instruction_data[1..]),
        1 => create_token::process(program_id, accounts, &instruction_data[1..]),
        2 => mint::process(program_id, accounts, &instruction_data[1..]),
        3 => burn::process(program_id, accounts, &instruction_data[1..]),
        4 => freeze::process(program_id, accounts, &instruction_data[1..]),
        5 => unfreeze::process(program_id, accounts, &instruction_data[1..]),
        6 => update_fee::process(program_id, accounts, &instruction_data[1..]),
        _ => Err(ProgramError::InvalidInstructionData),
    }
}

pinocchio_pubkey::declare_id!("7iuZJYZ6G7eCB167JfvXxgDx9n9kfPiD1v8pv3NpgvtB");

//! Token Manager Program Instructions

pub mod burn;
pub mod create_token;
pub mod freeze;
pub mod initialize;
pub mod mint;
pub mod unfreeze;
pub mod update_fee;

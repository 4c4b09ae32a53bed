//! pdagen-solana
//!
//! Program derived address (PDA) support for pdagen:
//! - Base58 program id parsing
//! - the canonical bump search and single-bump derivation
//! - verification of a stored `(uuid, bump)` pair against an address
//!
//! Derivation is bit-for-bit the Solana runtime's, so addresses computed here
//! are the ones on-chain programs re-derive.

pub mod constants;
pub mod pda;
pub mod program_id;

pub use constants::*;
pub use pda::*;
pub use program_id::*;

pub use solana_program::pubkey::Pubkey;

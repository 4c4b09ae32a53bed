//! Constants fixed by the Solana runtime's address derivation.
//!
//! Changing any of these produces addresses no on-chain program will accept.

/// Maximum number of seeds, the bump seed included.
pub const MAX_SEEDS: usize = 16;

/// Maximum length of a single seed in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Suffix appended to every derivation preimage.
pub const PDA_MARKER: &[u8; 21] = b"ProgramDerivedAddress";

/// Length of a program id and of a derived address.
pub const PUBKEY_BYTES: usize = 32;

/// First bump tried by the canonical search.
pub const MAX_BUMP: u8 = u8::MAX;

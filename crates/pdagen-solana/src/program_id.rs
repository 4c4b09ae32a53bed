//! Base58 key parsing for program ids and derived addresses.

use pdagen_core::{PdagenError, PdagenResult};
use solana_program::pubkey::Pubkey;

use crate::constants::PUBKEY_BYTES;

/// Decode a Base58 program id into a [`Pubkey`].
///
/// The text must use the Bitcoin Base58 alphabet and decode to exactly
/// 32 bytes. Whitespace is not stripped.
pub fn parse_program_id(text: &str) -> PdagenResult<Pubkey> {
    decode_pubkey(text).map_err(PdagenError::invalid_program_id)
}

/// Decode a Base58 account address, with the same rules as [`parse_program_id`].
pub fn parse_address(text: &str) -> PdagenResult<Pubkey> {
    decode_pubkey(text).map_err(PdagenError::invalid_address)
}

fn decode_pubkey(text: &str) -> Result<Pubkey, String> {
    let bytes = bs58::decode(text)
        .into_vec()
        .map_err(|e| format!("{text:?} is not base58: {e}"))?;
    let raw: [u8; PUBKEY_BYTES] = bytes
        .as_slice()
        .try_into()
        .map_err(|_| format!("{text:?} decodes to {} bytes, expected {PUBKEY_BYTES}", bytes.len()))?;
    Ok(Pubkey::new_from_array(raw))
}

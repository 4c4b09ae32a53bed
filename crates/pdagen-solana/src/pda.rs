//! Program derived address derivation.
//!
//! This is the runtime's algorithm, reimplemented so every failure surfaces as
//! a [`PdagenError`] instead of a panic:
//!
//! `candidate = sha256(seed_1 || .. || seed_n || program_id || "ProgramDerivedAddress")`
//!
//! A candidate is a valid PDA only if it does not decompress to an ed25519
//! point. The canonical bump is the largest `b` in `255..=0` for which
//! `seeds ++ [[b]]` gives an off-curve candidate.

use pdagen_core::seed::SeedBytes;
use pdagen_core::{PdagenError, PdagenResult};
use sha2::{Digest, Sha256};
use solana_program::pubkey::Pubkey;

use crate::constants::{MAX_BUMP, MAX_SEEDS, MAX_SEED_LEN, PDA_MARKER, PUBKEY_BYTES};

/// Derive the address for exactly these seeds, without a bump search.
///
/// Fails with `AddressOnCurve` when the candidate is a valid curve point.
pub fn create_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> PdagenResult<Pubkey> {
    check_seeds(seeds, MAX_SEEDS)?;
    let candidate = hash_candidate(seeds, program_id);
    if is_off_curve(&candidate) {
        Ok(Pubkey::new_from_array(candidate))
    } else {
        Err(PdagenError::AddressOnCurve)
    }
}

/// Find the canonical program address and bump for `seeds`.
///
/// At most `MAX_SEEDS - 1` seeds may be given since the bump takes the last slot.
pub fn find_program_address(seeds: &[&[u8]], program_id: &Pubkey) -> PdagenResult<(Pubkey, u8)> {
    search_bump(seeds, program_id, is_off_curve)
}

/// Derive the PDA for a single 16-byte uuid seed.
pub fn derive_uuid_pda(program_id: &Pubkey, seed: &SeedBytes) -> PdagenResult<(Pubkey, u8)> {
    find_program_address(&[seed.as_slice()], program_id)
}

/// Check that `expected` is the address derived from `seed` with `bump`.
///
/// This is the check an on-chain program performs on the account it is handed.
/// The bump need not be canonical.
pub fn verify_uuid_pda(
    program_id: &Pubkey,
    seed: &SeedBytes,
    bump: u8,
    expected: &Pubkey,
) -> PdagenResult<()> {
    let derived = create_program_address(&[seed.as_slice(), &[bump]], program_id)?;
    if derived != *expected {
        return Err(PdagenError::PdaMismatch {
            derived: derived.to_string(),
            expected: expected.to_string(),
        });
    }
    Ok(())
}

fn search_bump<F>(seeds: &[&[u8]], program_id: &Pubkey, off_curve: F) -> PdagenResult<(Pubkey, u8)>
where
    F: Fn(&[u8; PUBKEY_BYTES]) -> bool,
{
    check_seeds(seeds, MAX_SEEDS - 1)?;

    // Only the bump and the suffix change between candidates.
    let prefix = hash_seeds(seeds);
    for bump in (0..=MAX_BUMP).rev() {
        let candidate = finish_candidate(prefix.clone().chain_update([bump]), program_id);
        if off_curve(&candidate) {
            let address = Pubkey::new_from_array(candidate);
            tracing::debug!(%address, bump, "found program address");
            return Ok((address, bump));
        }
        tracing::trace!(bump, "candidate on curve");
    }
    Err(PdagenError::NoValidBumpFound)
}

fn check_seeds(seeds: &[&[u8]], max_seeds: usize) -> PdagenResult<()> {
    if seeds.len() > max_seeds {
        // Report the count the runtime sees, bump included.
        let bump_slot = MAX_SEEDS - max_seeds;
        return Err(PdagenError::TooManySeeds {
            count: seeds.len() + bump_slot,
            max: MAX_SEEDS,
        });
    }
    if let Some((index, seed)) = seeds.iter().enumerate().find(|(_, s)| s.len() > MAX_SEED_LEN) {
        return Err(PdagenError::SeedTooLong {
            index,
            len: seed.len(),
            max: MAX_SEED_LEN,
        });
    }
    Ok(())
}

fn hash_candidate(seeds: &[&[u8]], program_id: &Pubkey) -> [u8; PUBKEY_BYTES] {
    finish_candidate(hash_seeds(seeds), program_id)
}

fn hash_seeds(seeds: &[&[u8]]) -> Sha256 {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher
}

fn finish_candidate(hasher: Sha256, program_id: &Pubkey) -> [u8; PUBKEY_BYTES] {
    hasher
        .chain_update(program_id.as_ref())
        .chain_update(PDA_MARKER)
        .finalize()
        .into()
}

/// True when `bytes` is not a valid compressed Edwards Y point.
fn is_off_curve(bytes: &[u8; PUBKEY_BYTES]) -> bool {
    !Pubkey::new_from_array(*bytes).is_on_curve()
}

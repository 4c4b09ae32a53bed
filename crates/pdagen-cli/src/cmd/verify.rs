use anyhow::{Context, Result};
use pdagen_core::seed::SeedValue;
use pdagen_solana::{derive_uuid_pda, parse_address, parse_program_id, verify_uuid_pda};
use serde::Serialize;

use crate::config::RunConfig;
use crate::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct VerifyOut {
    pub ok: bool,
    pub address: String,
    pub bump: u8,
    pub uuid: String,
    /// Whether `bump` is the one the canonical search returns.
    pub canonical: bool,
}

pub fn run(cfg: &RunConfig, program_id: &str, uuid: &str, bump: u8, address: &str) -> Result<()> {
    let out = verify(cfg, program_id, uuid, bump, address)?;
    output::print(&out, "ok")
}

pub fn verify(cfg: &RunConfig, program_id: &str, uuid: &str, bump: u8, address: &str) -> Result<VerifyOut> {
    let program_id = parse_program_id(program_id).context("--program-id")?;
    let expected = parse_address(address).context("--address")?;
    let uuid = SeedValue::from_text(uuid, &cfg.codec).context("--uuid")?;
    let seed = uuid.to_le_bytes();

    verify_uuid_pda(&program_id, &seed, bump, &expected)?;

    let (_, canonical_bump) = derive_uuid_pda(&program_id, &seed)?;
    if canonical_bump != bump {
        tracing::warn!(bump, canonical_bump, "address matches a non-canonical bump");
    }

    Ok(VerifyOut {
        ok: true,
        address: expected.to_string(),
        bump,
        uuid: uuid.to_string(),
        canonical: canonical_bump == bump,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdagen_core::{ErrorKind, PdagenError};

    const ZERO_PROGRAM: &str = "11111111111111111111111111111111";
    const ZERO_UUID_PDA: &str = "2m7ndksHewijGgWDWTkhBg3qNZLAg6QpRg2Qk4XFQso3";

    fn kind_of(err: &anyhow::Error) -> ErrorKind {
        err.downcast_ref::<PdagenError>().expect("pdagen error").kind()
    }

    #[test]
    fn canonical_pair_verifies() {
        let out = verify(&RunConfig::default(), ZERO_PROGRAM, "0", 254, ZERO_UUID_PDA).unwrap();
        assert!(out.ok);
        assert!(out.canonical);
        assert_eq!(out.uuid, "0");
    }

    #[test]
    fn non_canonical_bump_still_verifies() {
        let cfg = RunConfig::default();
        // Any off-curve bump below the canonical one is a valid (if unusual) PDA.
        let (bump, address) = (0..254u8)
            .rev()
            .find_map(|b| {
                let pid = parse_program_id(ZERO_PROGRAM).ok()?;
                let seed = 0u128.to_le_bytes();
                pdagen_solana::create_program_address(&[&seed, &[b]], &pid)
                    .ok()
                    .map(|a| (b, a.to_string()))
            })
            .unwrap();
        let out = verify(&cfg, ZERO_PROGRAM, "0", bump, &address).unwrap();
        assert!(!out.canonical);
    }

    #[test]
    fn wrong_bump_is_rejected() {
        let err = verify(&RunConfig::default(), ZERO_PROGRAM, "0", 255, ZERO_UUID_PDA).unwrap_err();
        assert_eq!(kind_of(&err), ErrorKind::AddressOnCurve);
    }

    #[test]
    fn wrong_uuid_is_rejected() {
        let err = verify(&RunConfig::default(), ZERO_PROGRAM, "1", 254, ZERO_UUID_PDA).unwrap_err();
        assert_eq!(kind_of(&err), ErrorKind::PdaMismatch);
    }

    #[test]
    fn bad_address_is_reported() {
        let err = verify(&RunConfig::default(), ZERO_PROGRAM, "0", 254, "0OIl").unwrap_err();
        assert_eq!(kind_of(&err), ErrorKind::InvalidAddress);
        assert!(format!("{err:#}").starts_with("--address: invalid address: "));
    }
}

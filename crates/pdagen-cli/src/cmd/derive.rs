use anyhow::{Context, Result};
use pdagen_core::seed::SeedValue;
use pdagen_solana::{derive_uuid_pda, parse_program_id};
use serde::Serialize;

use crate::config::RunConfig;
use crate::output;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DeriveOut {
    pub address: String,
    pub bump: u8,
    /// Decimal string; 128-bit integers do not survive most JSON readers.
    pub uuid: String,
}

impl DeriveOut {
    pub fn line(&self) -> String {
        format!("{},{},{}", self.address, self.bump, self.uuid)
    }
}

pub fn run(cfg: &RunConfig, program_id: &str, uuid: Option<&str>) -> Result<()> {
    let out = derive(cfg, program_id, uuid)?;
    output::print(&out, &out.line())
}

pub fn derive(cfg: &RunConfig, program_id: &str, uuid: Option<&str>) -> Result<DeriveOut> {
    let program_id = parse_program_id(program_id).context("--program-id")?;

    let uuid = match uuid {
        Some(text) => SeedValue::from_text(text, &cfg.codec).context("--uuid")?,
        None => {
            tracing::info!("no --uuid given, generating a random one");
            SeedValue::random()
        }
    };

    let (address, bump) = derive_uuid_pda(&program_id, &uuid.to_le_bytes())?;
    tracing::debug!(%program_id, %uuid, %address, bump, "derived pda");

    Ok(DeriveOut {
        address: address.to_string(),
        bump,
        uuid: uuid.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdagen_core::{ErrorKind, PdagenError};

    const ZERO_PROGRAM: &str = "11111111111111111111111111111111";

    fn kind_of(err: &anyhow::Error) -> ErrorKind {
        err.downcast_ref::<PdagenError>().expect("pdagen error").kind()
    }

    #[test]
    fn regression_line() {
        let out = derive(&RunConfig::default(), ZERO_PROGRAM, Some("0")).unwrap();
        assert_eq!(out.line(), "2m7ndksHewijGgWDWTkhBg3qNZLAg6QpRg2Qk4XFQso3,254,0");
    }

    #[test]
    fn hex_and_decimal_agree() {
        let cfg = RunConfig::default();
        let a = derive(&cfg, ZERO_PROGRAM, Some("27")).unwrap();
        let b = derive(&cfg, ZERO_PROGRAM, Some("0x1b")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.bump, 250);
        assert_eq!(a.uuid, "27");
    }

    #[test]
    fn random_uuid_when_absent() {
        let cfg = RunConfig::default();
        let a = derive(&cfg, ZERO_PROGRAM, None).unwrap();
        let b = derive(&cfg, ZERO_PROGRAM, None).unwrap();
        assert_ne!(a.uuid, b.uuid);
        assert_ne!(a.address, b.address);
        a.uuid.parse::<u128>().unwrap();
    }

    #[test]
    fn errors_keep_their_kind() {
        let cfg = RunConfig::default();
        let err = derive(&cfg, "not-base58!", Some("0")).unwrap_err();
        assert_eq!(kind_of(&err), ErrorKind::InvalidProgramId);
        assert!(format!("{err:#}").starts_with("--program-id: "));

        let err = derive(&cfg, ZERO_PROGRAM, Some("zz")).unwrap_err();
        assert_eq!(kind_of(&err), ErrorKind::InvalidSeedFormat);

        let err = derive(&cfg, ZERO_PROGRAM, Some("340282366920938463463374607431768211456")).unwrap_err();
        assert_eq!(kind_of(&err), ErrorKind::SeedOutOfRange);
    }

    #[test]
    fn json_shape() {
        let out = derive(&RunConfig::default(), ZERO_PROGRAM, Some("0")).unwrap();
        let v = serde_json::to_value(&out).unwrap();
        assert_eq!(v["address"], "2m7ndksHewijGgWDWTkhBg3qNZLAg6QpRg2Qk4XFQso3");
        assert_eq!(v["bump"], 254);
        assert_eq!(v["uuid"], "0");
    }
}

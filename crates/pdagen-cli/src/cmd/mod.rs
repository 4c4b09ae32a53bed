use anyhow::{anyhow, Result};

use crate::args::{Cli, Command};
use crate::config::RunConfig;

mod derive;
mod verify;

pub fn dispatch(cli: Cli, cfg: &RunConfig) -> Result<()> {
    match cli.command {
        Some(Command::Verify { program_id, uuid, bump, address }) => {
            verify::run(cfg, &program_id, &uuid, bump, &address)
        }
        None => {
            let program_id = cli.derive.program_id.ok_or_else(|| anyhow!("--program-id is required"))?;
            derive::run(cfg, &program_id, cli.derive.uuid.as_deref())
        }
    }
}

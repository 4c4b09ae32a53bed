use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pdagen",
    version,
    about = "Generate a PDA from a program ID and an optional UUID (u128 LE). \
             Outputs PDA, bump seed, and the UUID as a decimal bigint.",
    subcommand_negates_reqs = true,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter for stderr diagnostics (e.g. `debug`, `pdagen_solana=trace`).
    #[arg(long, global = true, default_value = "warn")]
    pub log: String,

    #[command(flatten)]
    pub derive: DeriveArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Args, Debug, Clone)]
pub struct DeriveArgs {
    /// Base58-encoded program public key.
    #[arg(long, required = true)]
    pub program_id: Option<String>,

    /// UUID as decimal or hex (e.g. 123456789 or 0x1a2b3c4d5e6f...).
    /// If omitted a random UUID is generated.
    #[arg(long, allow_hyphen_values = true)]
    pub uuid: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check that an address is the PDA of a program id, uuid and bump.
    Verify {
        /// Base58-encoded program public key.
        #[arg(long)]
        program_id: String,
        /// UUID as decimal or hex.
        #[arg(long, allow_hyphen_values = true)]
        uuid: String,
        /// Bump seed stored alongside the uuid.
        #[arg(long)]
        bump: u8,
        /// Base58-encoded address to check.
        #[arg(long)]
        address: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_flags() {
        let cli = Cli::try_parse_from(["pdagen", "--program-id", "abc", "--uuid", "-1"]).unwrap();
        assert_eq!(cli.derive.program_id.as_deref(), Some("abc"));
        assert_eq!(cli.derive.uuid.as_deref(), Some("-1"));
        assert!(cli.command.is_none());
        assert_eq!(cli.log, "warn");
    }

    #[test]
    fn program_id_required_without_subcommand() {
        assert!(Cli::try_parse_from(["pdagen", "--uuid", "1"]).is_err());
    }

    #[test]
    fn verify_does_not_need_top_level_program_id() {
        let cli = Cli::try_parse_from([
            "pdagen", "verify", "--program-id", "p", "--uuid", "0", "--bump", "254", "--address", "a",
        ])
        .unwrap();
        assert!(cli.derive.program_id.is_none());
        match cli.command {
            Some(Command::Verify { bump, .. }) => assert_eq!(bump, 254),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn bump_must_fit_u8() {
        assert!(Cli::try_parse_from([
            "pdagen", "verify", "--program-id", "p", "--uuid", "0", "--bump", "256", "--address", "a",
        ])
        .is_err());
    }

    #[test]
    fn derive_flags_conflict_with_verify() {
        assert!(Cli::try_parse_from([
            "pdagen", "--program-id", "x", "--uuid", "5", "verify", "--program-id", "p", "--uuid", "0",
            "--bump", "1", "--address", "a",
        ])
        .is_err());
    }

    #[test]
    fn json_is_global() {
        let cli = Cli::try_parse_from([
            "pdagen", "verify", "--program-id", "p", "--uuid", "0", "--bump", "1", "--address", "a", "--json",
        ])
        .unwrap();
        assert!(cli.json);
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

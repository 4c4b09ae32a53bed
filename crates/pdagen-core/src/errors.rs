//! Error taxonomy shared by every pdagen crate.
//!
//! Each variant carries a stable [`ErrorKind`] code. Codes are part of the
//! public surface: tests and callers match on them rather than on messages.

use thiserror::Error;

pub type PdagenResult<T> = Result<T, PdagenError>;

/// Stable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidProgramId,
    InvalidAddress,
    InvalidSeedFormat,
    SeedOutOfRange,
    InvalidSeedLength,
    SeedTooLong,
    TooManySeeds,
    AddressOnCurve,
    NoValidBumpFound,
    PdaMismatch,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidProgramId => "InvalidProgramId",
            Self::InvalidAddress => "InvalidAddress",
            Self::InvalidSeedFormat => "InvalidSeedFormat",
            Self::SeedOutOfRange => "SeedOutOfRange",
            Self::InvalidSeedLength => "InvalidSeedLength",
            Self::SeedTooLong => "SeedTooLong",
            Self::TooManySeeds => "TooManySeeds",
            Self::AddressOnCurve => "AddressOnCurve",
            Self::NoValidBumpFound => "NoValidBumpFound",
            Self::PdaMismatch => "PdaMismatch",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PdagenError {
    #[error("invalid program id: {reason}")]
    InvalidProgramId { reason: String },

    #[error("invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("seed is neither a decimal nor a hexadecimal integer: {input:?}")]
    InvalidSeedFormat { input: String },

    #[error("seed must fit into an unsigned 128-bit integer (0 <= seed < 2^128): {input:?}")]
    SeedOutOfRange { input: String },

    #[error("expected {expected} seed bytes, got {actual}")]
    InvalidSeedLength { expected: usize, actual: usize },

    #[error("seed #{index} is {len} bytes, at most {max} allowed")]
    SeedTooLong { index: usize, len: usize, max: usize },

    #[error("{count} seeds given, at most {max} allowed")]
    TooManySeeds { count: usize, max: usize },

    #[error("derived address lies on the ed25519 curve")]
    AddressOnCurve,

    #[error("no bump in 0..=255 yields an off-curve address")]
    NoValidBumpFound,

    #[error("derived address {derived} does not match expected {expected}")]
    PdaMismatch { derived: String, expected: String },
}

impl PdagenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidProgramId { .. } => ErrorKind::InvalidProgramId,
            Self::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            Self::InvalidSeedFormat { .. } => ErrorKind::InvalidSeedFormat,
            Self::SeedOutOfRange { .. } => ErrorKind::SeedOutOfRange,
            Self::InvalidSeedLength { .. } => ErrorKind::InvalidSeedLength,
            Self::SeedTooLong { .. } => ErrorKind::SeedTooLong,
            Self::TooManySeeds { .. } => ErrorKind::TooManySeeds,
            Self::AddressOnCurve => ErrorKind::AddressOnCurve,
            Self::NoValidBumpFound => ErrorKind::NoValidBumpFound,
            Self::PdaMismatch { .. } => ErrorKind::PdaMismatch,
        }
    }

    pub fn invalid_program_id(reason: impl Into<String>) -> Self {
        Self::InvalidProgramId { reason: reason.into() }
    }

    pub fn invalid_address(reason: impl Into<String>) -> Self {
        Self::InvalidAddress { reason: reason.into() }
    }

    pub fn invalid_seed_format(input: impl Into<String>) -> Self {
        Self::InvalidSeedFormat { input: input.into() }
    }

    pub fn seed_out_of_range(input: impl Into<String>) -> Self {
        Self::SeedOutOfRange { input: input.into() }
    }
}

//! Configuration structures for pdagen-core.
//!
//! The core crate itself does not read environment variables. All configuration
//! must be provided explicitly by the caller.

/// Seed text parsing options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Strip surrounding whitespace before parsing.
    pub trim_whitespace: bool,
    /// Retry unprefixed text as hexadecimal when it is not a decimal integer.
    pub hex_fallback: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            trim_whitespace: true,
            hex_fallback: true,
        }
    }
}

/// Supported seed radices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedRadix {
    Decimal,
    Hex,
}

impl SeedRadix {
    pub fn as_u32(&self) -> u32 {
        match self {
            Self::Decimal => 10,
            Self::Hex => 16,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Hex => "hex",
        }
    }
}

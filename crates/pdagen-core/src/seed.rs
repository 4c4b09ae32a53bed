//! 128-bit seed codec.
//!
//! A seed ("uuid") is an unsigned integer in `[0, 2^128)`. Externally it is
//! decimal or hexadecimal text; internally it is always the 16-byte
//! little-endian encoding that programs pass to `create_program_address`
//! (`uuid.to_le_bytes()`).
//!
//! Parsing rules:
//! - `0x`/`0X` prefix: hexadecimal digits only
//! - otherwise decimal first, then hexadecimal (an optional `0x` after the
//!   sign is tolerated in this fallback)
//! - one optional leading `+` or `-`; `-0` is zero, other negatives are out
//!   of range
//! - an all-digit decimal that overflows 128 bits is out of range, it never
//!   falls back to hexadecimal
//! - single `_` digit separators are allowed (`1_000`, `0x_ff`)

use std::fmt;
use std::num::IntErrorKind;

use rand::rngs::OsRng;
use rand::RngCore;

use crate::config::{CodecConfig, SeedRadix};
use crate::errors::{PdagenError, PdagenResult};

/// Length of the canonical seed encoding.
pub const SEED_LEN: usize = 16;

/// Canonical seed encoding: 16 bytes, little-endian.
pub type SeedBytes = [u8; SEED_LEN];

/// Encode seed text with the default codec options.
pub fn encode_seed(text: &str) -> PdagenResult<SeedBytes> {
    encode_seed_with(text, &CodecConfig::default())
}

/// Encode seed text into its canonical 16-byte form.
pub fn encode_seed_with(text: &str, cfg: &CodecConfig) -> PdagenResult<SeedBytes> {
    Ok(parse_seed(text, cfg)?.to_le_bytes())
}

/// Decode a canonical seed buffer back into its integer value.
pub fn decode_seed(bytes: &[u8]) -> PdagenResult<u128> {
    let buf: SeedBytes = bytes.try_into().map_err(|_| PdagenError::InvalidSeedLength {
        expected: SEED_LEN,
        actual: bytes.len(),
    })?;
    Ok(u128::from_le_bytes(buf))
}

/// Draw a fresh seed from the operating system CSPRNG.
pub fn random_seed() -> SeedBytes {
    let mut buf = [0u8; SEED_LEN];
    OsRng.fill_bytes(&mut buf);
    buf
}

/// Parse seed text into its integer value.
pub fn parse_seed(text: &str, cfg: &CodecConfig) -> PdagenResult<u128> {
    let s = if cfg.trim_whitespace { text.trim() } else { text };

    if let Some(body) = strip_hex_prefix(s) {
        return finish(parse_digits(body, SeedRadix::Hex, true), SeedRadix::Hex, text);
    }

    match parse_signed(s, SeedRadix::Decimal) {
        Attempt::NotANumber if cfg.hex_fallback => {
            finish(parse_signed(s, SeedRadix::Hex), SeedRadix::Hex, text)
        }
        attempt => finish(attempt, SeedRadix::Decimal, text),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    Value(u128),
    NotANumber,
    Overflow,
    Negative,
}

fn finish(attempt: Attempt, radix: SeedRadix, text: &str) -> PdagenResult<u128> {
    match attempt {
        Attempt::Value(v) => {
            tracing::debug!(radix = radix.as_str(), "parsed seed");
            Ok(v)
        }
        Attempt::NotANumber => Err(PdagenError::invalid_seed_format(text)),
        Attempt::Overflow | Attempt::Negative => Err(PdagenError::seed_out_of_range(text)),
    }
}

fn strip_hex_prefix(s: &str) -> Option<&str> {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"))
}

fn parse_signed(s: &str, radix: SeedRadix) -> Attempt {
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let attempt = match radix {
        SeedRadix::Hex => match strip_hex_prefix(rest) {
            Some(body) => parse_digits(body, radix, true),
            None => parse_digits(rest, radix, false),
        },
        SeedRadix::Decimal => parse_digits(rest, radix, false),
    };
    match attempt {
        Attempt::Value(0) => Attempt::Value(0),
        Attempt::Value(_) | Attempt::Overflow if negative => Attempt::Negative,
        other => other,
    }
}

/// Unsigned digits only; signs and prefixes are handled by the callers.
///
/// Single `_` separators may sit between digits, and directly after a base
/// prefix when `prefixed` is set.
fn parse_digits(digits: &str, radix: SeedRadix, prefixed: bool) -> Attempt {
    let r = radix.as_u32();
    let digits = match digits.strip_prefix('_') {
        Some(rest) if prefixed => rest,
        _ => digits,
    };
    if !is_grouped_digits(digits, r) {
        return Attempt::NotANumber;
    }
    let plain: String = digits.chars().filter(|&c| c != '_').collect();
    match u128::from_str_radix(&plain, r) {
        Ok(v) => Attempt::Value(v),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Attempt::Overflow,
        Err(_) => Attempt::NotANumber,
    }
}

fn is_grouped_digits(digits: &str, radix: u32) -> bool {
    !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c == '_' || c.is_digit(radix))
}

/// A seed value in `[0, 2^128)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SeedValue(u128);

impl SeedValue {
    pub fn from_text(text: &str, cfg: &CodecConfig) -> PdagenResult<Self> {
        parse_seed(text, cfg).map(Self)
    }

    pub fn random() -> Self {
        Self(u128::from_le_bytes(random_seed()))
    }

    pub fn to_le_bytes(&self) -> SeedBytes {
        self.0.to_le_bytes()
    }
}

impl fmt::Display for SeedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

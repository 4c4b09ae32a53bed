//! pdagen-core
//!
//! Core primitives for pdagen:
//! - the 128-bit seed codec (text <-> 16-byte little-endian)
//! - explicit codec configuration
//! - the error taxonomy shared by every pdagen crate

pub mod config;
pub mod errors;
pub mod seed;

pub use crate::errors::{ErrorKind, PdagenError, PdagenResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::config::{CodecConfig, SeedRadix};
    pub use crate::seed::{
        decode_seed, encode_seed, encode_seed_with, random_seed, SeedBytes, SeedValue, SEED_LEN,
    };
    pub use crate::{ErrorKind, PdagenError, PdagenResult};
}

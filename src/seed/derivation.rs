//! Text-to-seed hashing and the random seed fallback
//!
//! A seed is a 256-bit BLAKE3 digest of the raw UTF-8 bytes of the input text.
//! Bytes are hashed as given, so two strings that only differ in Unicode
//! normalization produce different seeds on every platform.

use log::debug;
use rand::RngCore;
use std::fmt;

/// Fixed-width seed driving one pattern generator
///
/// Viewed as an integer the bytes are big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed([u8; 32]);

impl Seed {
    /// Wrap raw seed bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw seed bytes as fed to the generator
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Most significant 64 bits of the seed
    pub const fn leading_u64(&self) -> u64 {
        let [b0, b1, b2, b3, b4, b5, b6, b7, ..] = self.0;
        u64::from_be_bytes([b0, b1, b2, b3, b4, b5, b6, b7])
    }

    /// Sixteen hex characters identifying the seed in file names
    pub fn short_hex(&self) -> String {
        format!("{:016x}", self.leading_u64())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Where a generation call takes its seed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// Hash of the given non-empty text
    Deterministic(String),
    /// Fresh system randomness, different on every resolution
    Random,
}

impl SeedSource {
    /// Choose the source for optional input text
    ///
    /// Missing and empty text both select the random source.
    pub fn from_text(text: Option<&str>) -> Self {
        match text {
            Some(text) if !text.is_empty() => Self::Deterministic(text.to_string()),
            _ => Self::Random,
        }
    }

    /// Whether resolving this source twice yields the same seed
    pub const fn is_deterministic(&self) -> bool {
        matches!(self, Self::Deterministic(_))
    }

    /// Resolve the source into a concrete seed
    pub fn resolve(&self) -> Seed {
        let seed = match self {
            Self::Deterministic(text) => hash_text(text),
            Self::Random => random_seed(),
        };
        debug!("Resolved {} seed {seed}", self.kind());
        seed
    }

    const fn kind(&self) -> &'static str {
        match self {
            Self::Deterministic(_) => "deterministic",
            Self::Random => "random",
        }
    }
}

/// Derive the seed for optional input text
pub fn derive_seed(text: Option<&str>) -> Seed {
    SeedSource::from_text(text).resolve()
}

fn hash_text(text: &str) -> Seed {
    Seed(*blake3::hash(text.as_bytes()).as_bytes())
}

fn random_seed() -> Seed {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    Seed(bytes)
}

//! Seed derivation from input text or system randomness

/// Text hashing and seed source resolution
pub mod derivation;

pub use derivation::{Seed, SeedSource, derive_seed};

//! End-to-end generation requests

/// Configuration, single and batched generation
pub mod pipeline;

pub use pipeline::{GenerationConfig, Generated, generate, generate_batch};

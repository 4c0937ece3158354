//! Shared test fixtures for Sympatico crates.
//!
//! This crate provides profile builders and canned match scenarios.
//! It does NOT depend on `sympatico-scoring` so that the scoring crate can
//! use it as a dev-dependency.
//!
//! - [`profile`] - Uniform and pairwise profile/score builders
//! - [`scenario`] - Canned match score sets with known verdict shapes
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! sympatico-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use sympatico_test::profile::uniform_profile;
//! use sympatico_test::scenario::{critical_space_pair, dangerous_scores};
//! ```

pub mod profile;
pub mod scenario;

pub use profile::{
    profile_from_pairs, scores_from_pairs, uniform_profile, uniform_scores, with_override,
};
pub use scenario::{
    complementary_scores, critical_space_pair, dangerous_scores, minimal_danger_scores,
    DANGEROUS_VIRTUES,
};

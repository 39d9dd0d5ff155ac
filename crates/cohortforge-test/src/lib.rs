//! Shared test fixtures for CohortForge crates.
//!
//! This crate provides data and pure helpers for testing.
//! It does NOT depend on `cohortforge-engine` to avoid circular dependencies.
//!
//! - [`university`] - Canonical university classes with known overlaps
//! - [`criteria`] - Criteria map construction helpers
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! cohortforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use cohortforge_test::{criteria_map, university_classes};
//! ```

pub mod criteria;
pub mod university;

pub use criteria::criteria_map;
pub use university::{university_classes, university_config};

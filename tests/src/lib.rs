//! # Login-Key Account Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmarks for the validation paths
//! │   └── validation.rs
//! │
//! └── integration/      # End-to-end scenarios through Erc1271Validator
//!     ├── scenarios.rs
//!     └── key_rotation.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p account-tests
//!
//! # By category
//! cargo test -p account-tests integration::scenarios::
//! cargo test -p account-tests integration::key_rotation::
//!
//! # Benchmarks
//! cargo bench -p account-tests
//! ```

pub mod benchmarks;
pub mod fixtures;
pub mod integration;

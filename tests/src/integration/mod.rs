//! # Integration Tests
//!
//! End-to-end ERC-1271 flows through `Erc1271Validator`, backed by an
//! `InMemoryAuthKeyStore` and a pinned clock.

pub mod scenarios;

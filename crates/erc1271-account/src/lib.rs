//! # ERC-1271 Account Signatures
//!
//! Signature validation for smart-contract accounts that accept two tiers of
//! signing keys:
//!
//! - **Auth keys**: permanently authorized signers (owner + registered keys)
//! - **Login keys**: ephemeral signers authorized by an auth-key delegation
//!   that carries usage restrictions (currently an expiration time)
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure codec, recovery and authorization logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound/outbound interfaces
//! - **Adapters Layer** (`adapters/`): In-memory auth key store
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Signature Shapes
//!
//! | Length | Shape | Path |
//! |--------|-------|------|
//! | 65 | `r ‖ s ‖ v` | auth key |
//! | ≥ 130 | `primary(65) ‖ delegation(65) ‖ restrictions` | login key |
//! | other | malformed | abort |
//!
//! ## Verdicts
//!
//! Well-formed signatures always produce a value: the ERC-1271 magic value
//! (`0x1626ba7e` for the digest form, `0x20c13b0b` for the message form) or the
//! rejection sentinel `0xffffffff`. Structurally malformed input is an error,
//! never a sentinel.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_helpers;

// Re-export public API
pub use adapters::key_store::InMemoryAuthKeyStore;
pub use config::{ConfigError, EmptyRestrictions, RestrictionsPolicy, ValidatorConfig};
pub use domain::authority::AuthKeySet;
pub use domain::codec::{SignatureBlob, SIGNATURE_LENGTH, COMBINED_SIGNATURE_MIN_LENGTH};
pub use domain::digest::{
    encode_login_key_authorization, eth_signed_message_hash, keccak256,
    login_key_authorization_digest,
};
pub use domain::dispatch::{Decision, ValidationContext};
pub use domain::entities::{
    Address, Erc1271Form, Hash, RecoverableSignature, Selector, Timestamp, Verdict,
    ERC1271_INVALID_SIGNATURE, ERC1271_MAGIC_VALUE_BYTES, ERC1271_MAGIC_VALUE_BYTES32,
};
pub use domain::errors::{KeySetError, RecoveryError, RestrictionsError, ValidationError};
pub use domain::recovery::{address_from_pubkey, recover_signer};
pub use domain::restrictions::{encode_expiration, LoginKeyRestrictions, RestrictionsStatus};
pub use ports::inbound::Erc1271Api;
pub use ports::outbound::{AuthKeySource, FixedTimeSource, SystemTimeSource, TimeSource};
pub use service::Erc1271Validator;

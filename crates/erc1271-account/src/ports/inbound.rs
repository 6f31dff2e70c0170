//! # Inbound Ports (Driving Ports / API)
//!
//! The ERC-1271 surface of an account.

use crate::domain::entities::{Hash, Verdict};
use crate::domain::errors::ValidationError;

/// ERC-1271 signature validation API.
///
/// Implementations must be thread-safe (`Send + Sync`). Every method is a
/// pure function of its arguments, one auth key snapshot and one clock read.
///
/// `Ok` carries the soft outcome (magic value / sentinel, or a boolean);
/// `Err` is reserved for input that cannot be interpreted at all.
pub trait Erc1271Api: Send + Sync {
    /// `isValidSignature(bytes32 digest, bytes signature)`.
    ///
    /// Returns `0x1626ba7e` when accepted, `0xffffffff` when rejected.
    fn is_valid_signature(&self, digest: &Hash, signature: &[u8]) -> Result<Verdict, ValidationError>;

    /// `isValidSignature(bytes message, bytes signature)`.
    ///
    /// Hashes `message` with the EIP-191 personal-message prefix, then behaves
    /// like [`is_valid_signature`](Self::is_valid_signature) but accepts with
    /// `0x20c13b0b`.
    fn is_valid_message_signature(
        &self,
        message: &[u8],
        signature: &[u8],
    ) -> Result<Verdict, ValidationError>;

    /// Auth key path only. `signature` must be exactly 65 bytes.
    fn is_valid_auth_key_signature(
        &self,
        digest: &Hash,
        signature: &[u8],
    ) -> Result<bool, ValidationError>;

    /// Login key path only. `signature` must be at least 130 bytes.
    ///
    /// Expired or misdelegated login keys return `Ok(false)`.
    fn is_valid_login_key_signature(
        &self,
        digest: &Hash,
        signature: &[u8],
    ) -> Result<bool, ValidationError>;
}

//! # Domain Entities
//!
//! Core value types shared by the codec, recovery and dispatch layers.

use serde::{Deserialize, Serialize};

/// Ethereum-style address derived from public key (last 20 bytes of keccak256(pubkey))
pub type Address = [u8; 20];

/// 32-byte Keccak-256 digest
pub type Hash = [u8; 32];

/// Seconds since the Unix epoch
pub type Timestamp = u64;

/// 4-byte ERC-1271 return value
pub type Selector = [u8; 4];

/// Magic value for `isValidSignature(bytes32,bytes)`.
pub const ERC1271_MAGIC_VALUE_BYTES32: Selector = [0x16, 0x26, 0xba, 0x7e];

/// Magic value for `isValidSignature(bytes,bytes)`.
pub const ERC1271_MAGIC_VALUE_BYTES: Selector = [0x20, 0xc1, 0x3b, 0x0b];

/// Rejection sentinel shared by both forms.
pub const ERC1271_INVALID_SIGNATURE: Selector = [0xff, 0xff, 0xff, 0xff];

// =============================================================================
// ECDSA Types (secp256k1)
// =============================================================================

/// Recoverable ECDSA signature on the secp256k1 curve.
///
/// Wire layout is `r (32) ‖ s (32) ‖ v (1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecoverableSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

impl RecoverableSignature {
    /// Split a 65-byte wire signature into its components.
    pub fn from_bytes(bytes: &[u8; 65]) -> Self {
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Self { r, s, v: bytes[64] }
    }

    /// Serialize back to the 65-byte wire layout.
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

// =============================================================================
// Verdicts
// =============================================================================

/// Which ERC-1271 surface a validation was requested through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Erc1271Form {
    /// `isValidSignature(bytes32 digest, bytes signature)`
    Bytes32,
    /// `isValidSignature(bytes message, bytes signature)`
    Bytes,
}

impl Erc1271Form {
    /// Acceptance value returned for this form.
    pub fn magic_value(self) -> Selector {
        match self {
            Self::Bytes32 => ERC1271_MAGIC_VALUE_BYTES32,
            Self::Bytes => ERC1271_MAGIC_VALUE_BYTES,
        }
    }
}

/// Soft outcome of a well-formed validation.
///
/// Hard failures are not verdicts; they surface as
/// [`ValidationError`](super::errors::ValidationError).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Signer authorized; carries the form's magic value.
    Accepted(Selector),
    /// Signer not authorized; carries `0xffffffff`.
    Rejected(Selector),
}

impl Verdict {
    /// Map a boolean authorization outcome onto the form's return values.
    pub fn from_outcome(authorized: bool, form: Erc1271Form) -> Self {
        if authorized {
            Self::Accepted(form.magic_value())
        } else {
            Self::Rejected(ERC1271_INVALID_SIGNATURE)
        }
    }

    /// The 4 bytes an ERC-1271 caller compares against.
    pub fn encode(&self) -> Selector {
        match self {
            Self::Accepted(value) | Self::Rejected(value) => *value,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

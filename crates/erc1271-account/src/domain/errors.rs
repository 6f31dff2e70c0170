//! # Validation Errors
//!
//! Abort-class failures. Anything in this module means the input could not be
//! interpreted at all; an unauthorized but well-formed signature is never an
//! error, it is a [`Verdict::Rejected`](super::entities::Verdict) or `false`.

use thiserror::Error;

/// Errors raised while recovering a signer from a 65-byte signature.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RecoveryError {
    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// R or S is zero or not below the curve order
    #[error("Signature scalar out of range")]
    ScalarOutOfRange,

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,
}

/// Errors raised while decoding a login key restrictions payload.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RestrictionsError {
    #[error("Restrictions payload is empty")]
    Empty,

    #[error("Restrictions payload has invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// Errors raised while building an [`AuthKeySet`](super::authority::AuthKeySet).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum KeySetError {
    /// The zero address can never be an auth key.
    #[error("Zero address cannot be an auth key")]
    ZeroAddress,
}

/// Hard failure of a validation call.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("ERC1271: Invalid isValidSignature _signature length ({0} bytes)")]
    InvalidSignatureLength(usize),

    #[error("ERC1271: Invalid isValidAuthKeySignature _signature length ({0} bytes)")]
    InvalidAuthKeySignatureLength(usize),

    #[error("ERC1271: Invalid isValidLoginKeySignature _signature length ({0} bytes)")]
    InvalidLoginKeySignatureLength(usize),

    #[error("Malformed signature: {0}")]
    Recovery(#[from] RecoveryError),

    #[error("Malformed login key restrictions: {0}")]
    Restrictions(#[from] RestrictionsError),
}

impl ValidationError {
    /// Stable machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidSignatureLength(_) => "invalid_signature_length",
            Self::InvalidAuthKeySignatureLength(_) => "invalid_auth_key_signature_length",
            Self::InvalidLoginKeySignatureLength(_) => "invalid_login_key_signature_length",
            Self::Recovery(RecoveryError::InvalidRecoveryId(_)) => "invalid_recovery_id",
            Self::Recovery(RecoveryError::ScalarOutOfRange) => "scalar_out_of_range",
            Self::Recovery(RecoveryError::MalleableSignature) => "malleable_signature",
            Self::Recovery(RecoveryError::RecoveryFailed) => "recovery_failed",
            Self::Restrictions(_) => "malformed_restrictions",
        }
    }

    /// True for the three signature-length failures.
    pub fn is_length_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSignatureLength(_)
                | Self::InvalidAuthKeySignatureLength(_)
                | Self::InvalidLoginKeySignatureLength(_)
        )
    }
}

//! # Login Key Restrictions
//!
//! Decodes and evaluates the payload trailing a combined signature.
//!
//! The payload is ABI-encoded `uint256 expiration` (seconds since the Unix
//! epoch, big-endian, one 32-byte word). A login key is usable while
//! `now <= expiration`.

use super::entities::Timestamp;
use super::errors::RestrictionsError;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// ABI word holding the expiration.
pub const RESTRICTIONS_WORD_LENGTH: usize = 32;

/// How to treat a combined signature whose restrictions payload is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyRestrictions {
    /// Abort as malformed (fail-closed).
    #[default]
    Malformed,
    /// Treat as a login key that never expires.
    NoExpiry,
}

/// Decoding policy for restrictions payloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestrictionsPolicy {
    pub empty_restrictions: EmptyRestrictions,
    /// Require exactly one word. When false, bytes after the first word are
    /// ignored by the decoder (they are still bound by the delegation signature).
    pub strict_length: bool,
}

/// Decoded restrictions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginKeyRestrictions {
    pub expires_at: U256,
}

impl LoginKeyRestrictions {
    /// A login key that never expires.
    pub fn unrestricted() -> Self {
        Self {
            expires_at: U256::MAX,
        }
    }

    pub fn decode(payload: &[u8], policy: &RestrictionsPolicy) -> Result<Self, RestrictionsError> {
        if payload.is_empty() {
            return match policy.empty_restrictions {
                EmptyRestrictions::Malformed => Err(RestrictionsError::Empty),
                EmptyRestrictions::NoExpiry => Ok(Self::unrestricted()),
            };
        }

        let too_short = payload.len() < RESTRICTIONS_WORD_LENGTH;
        let too_long = policy.strict_length && payload.len() > RESTRICTIONS_WORD_LENGTH;
        if too_short || too_long {
            return Err(RestrictionsError::InvalidLength {
                expected: RESTRICTIONS_WORD_LENGTH,
                actual: payload.len(),
            });
        }

        Ok(Self {
            expires_at: U256::from_big_endian(&payload[..RESTRICTIONS_WORD_LENGTH]),
        })
    }

    pub fn is_usable_at(&self, at_time: Timestamp) -> bool {
        U256::from(at_time) <= self.expires_at
    }
}

/// Result of evaluating a restrictions payload at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestrictionsStatus {
    Usable,
    Expired,
    Malformed(RestrictionsError),
}

/// Decode `payload` and check it against `at_time`.
pub fn evaluate(payload: &[u8], at_time: Timestamp, policy: &RestrictionsPolicy) -> RestrictionsStatus {
    match LoginKeyRestrictions::decode(payload, policy) {
        Ok(restrictions) if restrictions.is_usable_at(at_time) => RestrictionsStatus::Usable,
        Ok(_) => RestrictionsStatus::Expired,
        Err(e) => RestrictionsStatus::Malformed(e),
    }
}

/// ABI-encode an expiration as a restrictions payload.
pub fn encode_expiration(expires_at: Timestamp) -> [u8; RESTRICTIONS_WORD_LENGTH] {
    let mut word = [0u8; RESTRICTIONS_WORD_LENGTH];
    word[RESTRICTIONS_WORD_LENGTH - 8..].copy_from_slice(&expires_at.to_be_bytes());
    word
}

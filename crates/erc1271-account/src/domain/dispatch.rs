//! # Validation Dispatcher
//!
//! Routes a classified signature blob through recovery, key authority and
//! restrictions, and maps the result onto ERC-1271 return values.
//!
//! Everything here is a pure function of its inputs: the auth key snapshot and
//! the current time are passed in through [`ValidationContext`].
//!
//! | Shape | Path | Outcome |
//! |-------|------|---------|
//! | Malformed | - | `Err(InvalidSignatureLength)` |
//! | Bare | auth key | Accepted iff signer is an auth key |
//! | Combined | login key | Accepted iff delegator is an auth key and restrictions are usable |

use super::authority::AuthKeySet;
use super::codec::{SignatureBlob, COMBINED_SIGNATURE_MIN_LENGTH, SIGNATURE_LENGTH};
use super::digest::login_key_authorization_digest;
use super::entities::{Address, Erc1271Form, Hash, Timestamp, Verdict};
use super::errors::ValidationError;
use super::recovery::recover_signer;
use super::restrictions::{evaluate, RestrictionsPolicy, RestrictionsStatus};

/// Everything a validation reads besides its arguments.
#[derive(Clone, Copy, Debug)]
pub struct ValidationContext<'a> {
    pub keys: &'a AuthKeySet,
    pub now: Timestamp,
    pub policy: &'a RestrictionsPolicy,
}

/// Result of the login key path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginKeyOutcome {
    pub login_key: Address,
    pub delegator: Address,
    pub delegator_authorized: bool,
    pub restrictions: RestrictionsStatus,
}

impl LoginKeyOutcome {
    pub fn is_valid(&self) -> bool {
        self.delegator_authorized && self.restrictions == RestrictionsStatus::Usable
    }
}

/// Outcome of a well-formed validation together with the identities
/// recovered on the way. `signer` is set on the auth key path, `login_key`
/// and `delegator` on the login key path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decision {
    pub authorized: bool,
    pub signer: Option<Address>,
    pub login_key: Option<Address>,
    pub delegator: Option<Address>,
}

impl Decision {
    fn auth_key((signer, authorized): (Address, bool)) -> Self {
        Self {
            authorized,
            signer: Some(signer),
            ..Self::default()
        }
    }
}

impl From<LoginKeyOutcome> for Decision {
    fn from(outcome: LoginKeyOutcome) -> Self {
        Self {
            authorized: outcome.is_valid(),
            signer: None,
            login_key: Some(outcome.login_key),
            delegator: Some(outcome.delegator),
        }
    }
}

impl<'a> ValidationContext<'a> {
    pub fn new(keys: &'a AuthKeySet, now: Timestamp, policy: &'a RestrictionsPolicy) -> Self {
        Self { keys, now, policy }
    }

    /// `isValidSignature` for either form, given the digest.
    pub fn validate(
        &self,
        digest: &Hash,
        blob: &SignatureBlob,
        form: Erc1271Form,
    ) -> Result<Verdict, ValidationError> {
        let decision = self.decide(digest, blob)?;
        Ok(Verdict::from_outcome(decision.authorized, form))
    }

    /// Route `blob` by shape and report who signed it.
    pub fn decide(&self, digest: &Hash, blob: &SignatureBlob) -> Result<Decision, ValidationError> {
        match blob {
            SignatureBlob::Malformed(bytes) => {
                Err(ValidationError::InvalidSignatureLength(bytes.len()))
            }
            SignatureBlob::Bare(signature) => {
                Ok(Decision::auth_key(self.auth_key_path(digest, signature)?))
            }
            SignatureBlob::Combined {
                primary,
                delegation,
                restrictions,
            } => Ok(self
                .login_key_path(digest, primary, delegation, restrictions)?
                .into()),
        }
    }

    /// Direct auth key check; the signature must be exactly 65 bytes.
    pub fn validate_auth_key(&self, digest: &Hash, signature: &[u8]) -> Result<bool, ValidationError> {
        Ok(self.decide_auth_key(digest, signature)?.authorized)
    }

    /// [`validate_auth_key`](Self::validate_auth_key) with the recovered signer.
    pub fn decide_auth_key(&self, digest: &Hash, signature: &[u8]) -> Result<Decision, ValidationError> {
        match SignatureBlob::parse(signature) {
            SignatureBlob::Bare(signature) => {
                Ok(Decision::auth_key(self.auth_key_path(digest, &signature)?))
            }
            other => Err(ValidationError::InvalidAuthKeySignatureLength(other.len())),
        }
    }

    /// Direct login key check; the signature must be at least 130 bytes.
    pub fn validate_login_key(&self, digest: &Hash, signature: &[u8]) -> Result<bool, ValidationError> {
        Ok(self.decide_login_key(digest, signature)?.authorized)
    }

    /// [`validate_login_key`](Self::validate_login_key) with the recovered login key and delegator.
    pub fn decide_login_key(&self, digest: &Hash, signature: &[u8]) -> Result<Decision, ValidationError> {
        if signature.len() < COMBINED_SIGNATURE_MIN_LENGTH {
            return Err(ValidationError::InvalidLoginKeySignatureLength(signature.len()));
        }
        match SignatureBlob::parse(signature) {
            SignatureBlob::Combined {
                primary,
                delegation,
                restrictions,
            } => Ok(self
                .login_key_path(digest, &primary, &delegation, &restrictions)?
                .into()),
            other => Err(ValidationError::InvalidLoginKeySignatureLength(other.len())),
        }
    }

    /// Recover the signer and look it up. Returns `(signer, authorized)`.
    pub fn auth_key_path(
        &self,
        digest: &Hash,
        signature: &[u8; SIGNATURE_LENGTH],
    ) -> Result<(Address, bool), ValidationError> {
        let signer = recover_signer(digest, signature)?;
        Ok((signer, self.keys.is_auth_key(&signer)))
    }

    /// Recover the login key, then the delegator over the authorization digest,
    /// then evaluate the restrictions. Malformed restrictions abort even when
    /// the delegator is not authorized.
    pub fn login_key_path(
        &self,
        digest: &Hash,
        primary: &[u8; SIGNATURE_LENGTH],
        delegation: &[u8; SIGNATURE_LENGTH],
        restrictions: &[u8],
    ) -> Result<LoginKeyOutcome, ValidationError> {
        let login_key = recover_signer(digest, primary)?;

        let authorization_digest = login_key_authorization_digest(&login_key, restrictions);
        let delegator = recover_signer(&authorization_digest, delegation)?;

        let status = evaluate(restrictions, self.now, self.policy);
        if let RestrictionsStatus::Malformed(e) = status {
            return Err(e.into());
        }

        Ok(LoginKeyOutcome {
            login_key,
            delegator,
            delegator_authorized: self.keys.is_auth_key(&delegator),
            restrictions: status,
        })
    }
}

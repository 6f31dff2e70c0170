//! # ERC-1271 Validation Service
//!
//! Application service layer that implements the `Erc1271Api` trait.
//!
//! ## Architecture
//!
//! This is the hexagonal "application service" that:
//! - Implements the inbound port (`Erc1271Api`)
//! - Reads the outbound ports (`AuthKeySource`, `TimeSource`) exactly once per call
//! - Delegates codec, recovery and authorization to the domain layer

use crate::config::ValidatorConfig;
use crate::domain::codec::SignatureBlob;
use crate::domain::digest::eth_signed_message_hash;
use crate::domain::dispatch::{Decision, ValidationContext};
use crate::domain::entities::{Erc1271Form, Hash, Verdict};
use crate::domain::errors::ValidationError;
use crate::ports::inbound::Erc1271Api;
use crate::ports::outbound::{AuthKeySource, SystemTimeSource, TimeSource};
use tracing::{debug, warn};

/// ERC-1271 validator for a single account.
pub struct Erc1271Validator<A: AuthKeySource, T: TimeSource = SystemTimeSource> {
    keys: A,
    clock: T,
    config: ValidatorConfig,
}

impl<A: AuthKeySource> Erc1271Validator<A, SystemTimeSource> {
    /// Validator reading wall-clock time.
    pub fn new(keys: A) -> Self {
        Self::with_clock(keys, SystemTimeSource, ValidatorConfig::default())
    }
}

impl<A: AuthKeySource, T: TimeSource> Erc1271Validator<A, T> {
    pub fn with_clock(keys: A, clock: T, config: ValidatorConfig) -> Self {
        Self {
            keys,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn keys(&self) -> &A {
        &self.keys
    }

    /// Take one snapshot and one clock reading, then run `f` against them.
    fn with_context<R>(&self, f: impl FnOnce(&ValidationContext<'_>) -> R) -> R {
        let keys = self.keys.snapshot();
        let now = self.clock.now();
        let ctx = ValidationContext::new(&keys, now, &self.config.restrictions);
        f(&ctx)
    }

    fn validate_digest(
        &self,
        digest: &Hash,
        signature: &[u8],
        form: Erc1271Form,
    ) -> Result<Verdict, ValidationError> {
        let blob = SignatureBlob::parse(signature);
        let result = self.with_context(|ctx| ctx.decide(digest, &blob));
        let decision = logged(blob.kind(), digest, signature.len(), result)?;
        Ok(Verdict::from_outcome(decision.authorized, form))
    }
}

impl<A: AuthKeySource, T: TimeSource> Erc1271Api for Erc1271Validator<A, T> {
    fn is_valid_signature(&self, digest: &Hash, signature: &[u8]) -> Result<Verdict, ValidationError> {
        self.validate_digest(digest, signature, Erc1271Form::Bytes32)
    }

    fn is_valid_message_signature(
        &self,
        message: &[u8],
        signature: &[u8],
    ) -> Result<Verdict, ValidationError> {
        let digest = eth_signed_message_hash(message);
        self.validate_digest(&digest, signature, Erc1271Form::Bytes)
    }

    fn is_valid_auth_key_signature(
        &self,
        digest: &Hash,
        signature: &[u8],
    ) -> Result<bool, ValidationError> {
        let result = self.with_context(|ctx| ctx.decide_auth_key(digest, signature));
        Ok(logged("auth_key", digest, signature.len(), result)?.authorized)
    }

    fn is_valid_login_key_signature(
        &self,
        digest: &Hash,
        signature: &[u8],
    ) -> Result<bool, ValidationError> {
        let result = self.with_context(|ctx| ctx.decide_login_key(digest, signature));
        Ok(logged("login_key", digest, signature.len(), result)?.authorized)
    }
}

fn logged(
    shape: &str,
    digest: &Hash,
    signature_len: usize,
    result: Result<Decision, ValidationError>,
) -> Result<Decision, ValidationError> {
    match &result {
        Ok(decision) => log_decision(shape, digest, decision),
        Err(e) => log_abort(digest, signature_len, e),
    }
    result
}

fn log_decision(shape: &str, digest: &Hash, decision: &Decision) {
    let signer = decision.signer.map(hex::encode);
    let login_key = decision.login_key.map(hex::encode);
    let delegator = decision.delegator.map(hex::encode);
    debug!(
        digest = %hex::encode(digest),
        shape,
        signer = signer.as_deref(),
        login_key = login_key.as_deref(),
        delegator = delegator.as_deref(),
        authorized = decision.authorized,
        "Signature validated"
    );
}

fn log_abort(digest: &Hash, signature_len: usize, error: &ValidationError) {
    warn!(
        digest = %hex::encode(digest),
        signature_len,
        reason = error.reason(),
        "Signature validation aborted: {}",
        error
    );
}

//! Fuzz target for the validation dispatcher.
//!
//! Arbitrary digests, blobs and clock values must never panic, and the
//! outcome must be a pure function of the inputs.
//!
//! ## Running
//!
//! ```bash
//! cd crates/erc1271-account
//! cargo +nightly fuzz run fuzz_validate
//! ```

#![no_main]

use erc1271_account::{
    AuthKeySet, EmptyRestrictions, Erc1271Form, RestrictionsPolicy, SignatureBlob,
    ValidationContext, Verdict, ERC1271_INVALID_SIGNATURE, ERC1271_MAGIC_VALUE_BYTES,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct FuzzInput {
    digest: [u8; 32],
    signature: Vec<u8>,
    now: u64,
    auth_keys: Vec<[u8; 20]>,
    no_expiry: bool,
    strict_length: bool,
}

fuzz_target!(|input: FuzzInput| {
    let keys = AuthKeySet::from_keys(None, input.auth_keys.iter().copied().filter(|k| *k != [0u8; 20]))
        .unwrap_or_default();
    let policy = RestrictionsPolicy {
        empty_restrictions: if input.no_expiry {
            EmptyRestrictions::NoExpiry
        } else {
            EmptyRestrictions::Malformed
        },
        strict_length: input.strict_length,
    };
    let ctx = ValidationContext::new(&keys, input.now, &policy);
    let blob = SignatureBlob::parse(&input.signature);

    let result = ctx.validate(&input.digest, &blob, Erc1271Form::Bytes);

    // Deterministic
    assert_eq!(result, ctx.validate(&input.digest, &blob, Erc1271Form::Bytes));

    // Only the form's magic value or the sentinel ever comes back
    if let Ok(verdict) = result {
        match verdict {
            Verdict::Accepted(value) => assert_eq!(value, ERC1271_MAGIC_VALUE_BYTES),
            Verdict::Rejected(value) => assert_eq!(value, ERC1271_INVALID_SIGNATURE),
        }
    }

    // The bool entry points agree with the general one on their own shapes
    match &blob {
        SignatureBlob::Bare(_) => {
            let direct = ctx.validate_auth_key(&input.digest, &input.signature);
            assert_eq!(direct.is_ok(), result.is_ok());
            if let (Ok(valid), Ok(verdict)) = (direct, result) {
                assert_eq!(valid, verdict.is_accepted());
            }
        }
        SignatureBlob::Combined { .. } => {
            let direct = ctx.validate_login_key(&input.digest, &input.signature);
            assert_eq!(direct.is_ok(), result.is_ok());
            if let (Ok(valid), Ok(verdict)) = (direct, result) {
                assert_eq!(valid, verdict.is_accepted());
            }
        }
        SignatureBlob::Malformed(_) => assert!(result.is_err()),
    }
});

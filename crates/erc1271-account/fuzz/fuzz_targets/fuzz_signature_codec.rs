//! Fuzz target for the signature blob codec.
//!
//! ## Running
//!
//! ```bash
//! cd crates/erc1271-account
//! cargo +nightly fuzz run fuzz_signature_codec
//! ```

#![no_main]

use erc1271_account::{SignatureBlob, COMBINED_SIGNATURE_MIN_LENGTH, SIGNATURE_LENGTH};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let blob = SignatureBlob::parse(data);

    // Re-encoding is lossless for every shape
    assert_eq!(blob.encode(), data);
    assert_eq!(blob.len(), data.len());

    // Length alone decides the shape
    match &blob {
        SignatureBlob::Bare(_) => assert_eq!(data.len(), SIGNATURE_LENGTH),
        SignatureBlob::Combined { restrictions, .. } => {
            assert!(data.len() >= COMBINED_SIGNATURE_MIN_LENGTH);
            assert_eq!(restrictions.len(), data.len() - COMBINED_SIGNATURE_MIN_LENGTH);
        }
        SignatureBlob::Malformed(_) => {
            assert!(data.len() != SIGNATURE_LENGTH && data.len() < COMBINED_SIGNATURE_MIN_LENGTH)
        }
    }
});

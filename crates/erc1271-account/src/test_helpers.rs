//! Key generation and signing helpers for tests.
//!
//! Enabled for this crate's unit tests and, through the `test-utils` feature,
//! for the workspace test suite and benchmarks.

use crate::domain::codec::SignatureBlob;
use crate::domain::digest::login_key_authorization_digest;
use crate::domain::entities::{Address, Hash, RecoverableSignature};
use crate::domain::recovery::{address_from_pubkey, invert_s, is_low_s};
use k256::ecdsa::{SigningKey, VerifyingKey};

/// Generate a new ECDSA keypair.
pub fn generate_keypair() -> (SigningKey, VerifyingKey) {
    let signing_key = SigningKey::random(&mut rand::thread_rng());
    let verifying_key = *signing_key.verifying_key();
    (signing_key, verifying_key)
}

/// Sign a digest, returning the 65-byte `r ‖ s ‖ v` wire form with `v` in {27, 28}.
pub fn sign(digest: &Hash, private_key: &SigningKey) -> [u8; 65] {
    let (sig, recid) = private_key
        .sign_prehash_recoverable(digest)
        .expect("signing failed");

    let sig_bytes = sig.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&sig_bytes[..32]);
    s.copy_from_slice(&sig_bytes[32..]);

    // Normalize S to low value (EIP-2), flipping the recovery id with it
    let (s, v) = if is_low_s(&s) {
        (s, recid.to_byte() + 27)
    } else {
        (invert_s(&s), if recid.to_byte() == 0 { 28 } else { 27 })
    };

    RecoverableSignature { r, s, v }.to_bytes()
}

/// A signing key together with its address.
#[derive(Clone)]
pub struct TestKey {
    signing_key: SigningKey,
    address: Address,
}

impl TestKey {
    pub fn random() -> Self {
        let (signing_key, verifying_key) = generate_keypair();
        Self {
            address: address_from_pubkey(&verifying_key),
            signing_key,
        }
    }

    /// Deterministic key from a 32-byte secret. Panics on an invalid scalar.
    pub fn from_secret(secret: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_slice(&secret).expect("invalid secret key");
        Self {
            address: address_from_pubkey(signing_key.verifying_key()),
            signing_key,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn sign(&self, digest: &Hash) -> [u8; 65] {
        sign(digest, &self.signing_key)
    }

    /// Sign the authorization digest for `login_key` under `restrictions`.
    pub fn authorize_login_key(&self, login_key: &Address, restrictions: &[u8]) -> [u8; 65] {
        self.sign(&login_key_authorization_digest(login_key, restrictions))
    }
}

/// Build `primary ‖ delegation ‖ restrictions` for `login_key` vouched by `auth_key`.
pub fn combined_signature(
    digest: &Hash,
    login_key: &TestKey,
    auth_key: &TestKey,
    restrictions: &[u8],
) -> Vec<u8> {
    SignatureBlob::combined(
        login_key.sign(digest),
        auth_key.authorize_login_key(&login_key.address(), restrictions),
        restrictions,
    )
    .encode()
}

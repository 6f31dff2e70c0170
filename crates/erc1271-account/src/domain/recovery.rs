//! # Signer Recovery (secp256k1)
//!
//! The only place elliptic-curve public key recovery happens.
//!
//! ## Security Notes
//!
//! - **Scalar Range Validation**: R and S must be in [1, n-1]
//! - **Malleability Prevention (EIP-2)**: S must be STRICTLY LESS THAN half the order
//! - **Constant-Time Operations**: scalar comparisons use the `subtle` crate
//! - Malformed parameters are errors; recovery never yields a zero address

use super::digest::keccak256;
use super::entities::{Address, Hash, RecoverableSignature};
use super::errors::RecoveryError;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use subtle::{Choice, ConstantTimeEq};

/// secp256k1 curve order n
/// n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Half of the secp256k1 curve order, rounded down.
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0x5D, 0x57, 0x6E, 0x73, 0x57, 0xA4, 0x50, 0x1D, 0xDF, 0xE9, 0x2F, 0x46, 0x68, 0x1B, 0x20, 0xA0,
];

/// Recover the address that produced `signature` over `digest`.
///
/// Validation order:
/// 1. Recovery ID (v) is 0, 1, 27 or 28
/// 2. R and S are in [1, n-1]
/// 3. S is in the lower half of the order (EIP-2)
/// 4. Public key recovery succeeds
pub fn recover_signer(digest: &Hash, signature: &[u8; 65]) -> Result<Address, RecoveryError> {
    let signature = RecoverableSignature::from_bytes(signature);

    let recovery_id = parse_recovery_id(signature.v)?;

    if !is_valid_scalar(&signature.r) || !is_valid_scalar(&signature.s) {
        return Err(RecoveryError::ScalarOutOfRange);
    }

    if !is_low_s(&signature.s) {
        return Err(RecoveryError::MalleableSignature);
    }

    let mut sig_bytes = [0u8; 64];
    sig_bytes[..32].copy_from_slice(&signature.r);
    sig_bytes[32..].copy_from_slice(&signature.s);
    let sig = Signature::from_slice(&sig_bytes).map_err(|_| RecoveryError::ScalarOutOfRange)?;

    let recovered_key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| RecoveryError::RecoveryFailed)?;

    Ok(address_from_pubkey(&recovered_key))
}

/// Derive Ethereum address from public key.
pub fn address_from_pubkey(public_key: &VerifyingKey) -> Address {
    let pubkey_bytes = public_key.to_encoded_point(false);
    let pubkey_slice = pubkey_bytes.as_bytes();

    // Keccak256 hash of public key (without 0x04 prefix)
    let hash = keccak256(&pubkey_slice[1..]);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Parse recovery ID from v value.
///
/// Valid v values: 0, 1, 27, 28
fn parse_recovery_id(v: u8) -> Result<RecoveryId, RecoveryError> {
    let id: u8 = match v {
        0 | 27 => 0,
        1 | 28 => 1,
        _ => return Err(RecoveryError::InvalidRecoveryId(v)),
    };

    RecoveryId::try_from(id).map_err(|_| RecoveryError::InvalidRecoveryId(v))
}

/// Check if S value is in lower half of curve order (EIP-2 malleability protection).
///
/// Accepts `s <= n/2`; `n` is odd, so `s` and `n - s` never both pass.
/// Runs in constant time.
pub(crate) fn is_low_s(s: &[u8; 32]) -> bool {
    (ct_less_than(s, &SECP256K1_HALF_ORDER) | s[..].ct_eq(&SECP256K1_HALF_ORDER[..])).into()
}

/// Check if a scalar value is in valid range [1, n-1]. Runs in constant time.
fn is_valid_scalar(scalar: &[u8; 32]) -> bool {
    let mut is_zero = Choice::from(1u8);
    for &byte in scalar {
        is_zero &= byte.ct_eq(&0u8);
    }

    (!is_zero & ct_less_than(scalar, &SECP256K1_ORDER)).into()
}

/// Big-endian `a < b` without early exit.
fn ct_less_than(a: &[u8; 32], b: &[u8; 32]) -> Choice {
    let mut less = Choice::from(0u8);
    let mut greater = Choice::from(0u8);

    for i in 0..32 {
        let not_decided = !(less | greater);
        let byte_less = Choice::from((a[i] < b[i]) as u8);
        let byte_greater = Choice::from((a[i] > b[i]) as u8);

        less |= not_decided & byte_less;
        greater |= not_decided & byte_greater;
    }

    less
}

/// Invert S value: s' = n - s
pub fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let mut result = [0u8; 32];
    let mut borrow: i32 = 0;

    for i in (0..32).rev() {
        let diff = (SECP256K1_ORDER[i] as i32) - (s[i] as i32) - borrow;
        if diff < 0 {
            result[i] = (diff + 256) as u8;
            borrow = 1;
        } else {
            result[i] = diff as u8;
            borrow = 0;
        }
    }

    result
}

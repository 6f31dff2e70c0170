//! # Digest Builder
//!
//! Canonical Keccak-256 digests that account signatures are computed over.
//!
//! - Messages use the EIP-191 personal-message prefix
//!   (`"\x19Ethereum Signed Message:\n" ‖ len ‖ message`).
//! - Login key authorizations hash `abi.encode(address loginKey, bytes restrictions)`
//!   and then apply the same prefix to the 32-byte result.

use super::entities::{Address, Hash};
use sha3::{Digest, Keccak256};

const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

/// ABI word size.
const WORD: usize = 32;

/// Keccak256 hash function.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// EIP-191 personal-message digest of arbitrary bytes.
pub fn eth_signed_message_hash(message: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(ETH_SIGNED_MESSAGE_PREFIX);
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message);
    let result = hasher.finalize();
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&result);
    hash
}

/// `abi.encode(address loginKey, bytes restrictions)`.
///
/// Layout: address word, offset word (`0x40`), length word, then the
/// restrictions right-padded to a whole number of words.
pub fn encode_login_key_authorization(login_key: &Address, restrictions: &[u8]) -> Vec<u8> {
    let padded_len = restrictions.len().div_ceil(WORD) * WORD;
    let mut out = vec![0u8; 3 * WORD + padded_len];

    out[WORD - 20..WORD].copy_from_slice(login_key);
    out[2 * WORD - 1] = 0x40;
    out[2 * WORD..3 * WORD].copy_from_slice(&word_from_usize(restrictions.len()));
    out[3 * WORD..3 * WORD + restrictions.len()].copy_from_slice(restrictions);

    out
}

/// Digest an auth key signs to delegate to `login_key` under `restrictions`.
pub fn login_key_authorization_digest(login_key: &Address, restrictions: &[u8]) -> Hash {
    let payload_hash = keccak256(&encode_login_key_authorization(login_key, restrictions));
    eth_signed_message_hash(&payload_hash)
}

fn word_from_usize(value: usize) -> [u8; WORD] {
    let mut word = [0u8; WORD];
    word[WORD - 8..].copy_from_slice(&(value as u64).to_be_bytes());
    word
}

//! # ERC-1271 Validation Benchmarks
//!
//! | Group | Measures |
//! |-------|----------|
//! | erc1271/recovery | Raw secp256k1 recovery and message hashing |
//! | erc1271/auth_key | 65-byte path across auth key set sizes |
//! | erc1271/login_key | Combined path, expiry, restrictions size |
//! | erc1271/revert | Structural failure fast paths |

use account_tests::benchmarks::validation::{
    bench_auth_key_path, bench_login_key_path, bench_recovery, bench_structural_failures,
};
use criterion::{criterion_group, criterion_main};

criterion_group!(
    benches,
    bench_recovery,
    bench_auth_key_path,
    bench_login_key_path,
    bench_structural_failures
);
criterion_main!(benches);

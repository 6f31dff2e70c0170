//! # Benchmarks
//!
//! Criterion benchmark bodies, wired up in `benches/validation_benchmarks.rs`.

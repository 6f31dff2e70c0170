//! # Domain Layer
//!
//! Pure signature codec, recovery and authorization logic with no I/O.
//! This is the inner layer of the hexagonal architecture.

pub mod authority;
pub mod codec;
pub mod digest;
pub mod dispatch;
pub mod entities;
pub mod errors;
pub mod recovery;
pub mod restrictions;

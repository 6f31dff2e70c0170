//! # sig-check
//!
//! Runs the account's ERC-1271 entry points against hex inputs from the
//! command line and prints JSON reports.
//!
//! Exit status: `0` accepted, valid or informational; `1` rejected; `2`
//! reverted; `3` the check never ran (unreadable key or config file, no keys configured).

pub mod cli;
pub mod commands;
pub mod keys;

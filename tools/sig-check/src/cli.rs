//! Command-line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use erc1271_account::{Address, Hash};

use crate::keys::{parse_address, parse_bytes, parse_hash, HexBytes};

/// sig-check: ERC-1271 signature checker for auth key / login key accounts
#[derive(Parser, Debug)]
#[command(name = "sig-check")]
#[command(about = "Validate ERC-1271 signatures offline", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub account: AccountArgs,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Account state and environment used by the validating commands.
#[derive(Args, Debug, Default)]
pub struct AccountArgs {
    /// JSON key file: {"owner": "0x..", "auth_keys": ["0x..", ..]}
    #[arg(short, long, global = true)]
    pub keys: Option<PathBuf>,

    /// Additional auth key address (repeatable)
    #[arg(long = "auth-key", global = true, value_parser = parse_address)]
    pub auth_keys: Vec<Address>,

    /// Account owner address (overrides the key file)
    #[arg(long, global = true, value_parser = parse_address)]
    pub owner: Option<Address>,

    /// Evaluate restrictions at this Unix time instead of the wall clock
    #[arg(long, global = true)]
    pub now: Option<u64>,

    /// Validator configuration JSON file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// isValidSignature(bytes32, bytes)
    Digest {
        /// 32-byte digest (hex)
        #[arg(short, long, value_parser = parse_hash)]
        digest: Hash,

        /// Signature blob (hex)
        #[arg(short, long, value_parser = parse_bytes)]
        signature: HexBytes,
    },

    /// isValidSignature(bytes, bytes)
    Message {
        #[command(flatten)]
        message: MessageArgs,

        /// Signature blob (hex)
        #[arg(short, long, value_parser = parse_bytes)]
        signature: HexBytes,
    },

    /// isValidAuthKeySignature(bytes32, bytes)
    AuthKey {
        /// 32-byte digest (hex)
        #[arg(short, long, value_parser = parse_hash)]
        digest: Hash,

        /// 65-byte signature (hex)
        #[arg(short, long, value_parser = parse_bytes)]
        signature: HexBytes,
    },

    /// isValidLoginKeySignature(bytes32, bytes)
    LoginKey {
        /// 32-byte digest (hex)
        #[arg(short, long, value_parser = parse_hash)]
        digest: Hash,

        /// Combined signature blob (hex)
        #[arg(short, long, value_parser = parse_bytes)]
        signature: HexBytes,
    },

    /// Print the EIP-191 personal message hash
    HashMessage {
        #[command(flatten)]
        message: MessageArgs,
    },

    /// Print the digest an auth key signs to authorize a login key
    AuthorizeLoginKey {
        /// Login key address
        #[arg(short, long, value_parser = parse_address)]
        login_key: Address,

        /// Expiration (Unix seconds)
        #[arg(short, long)]
        expires_at: u64,
    },

    /// Classify a signature blob and decode its parts
    Inspect {
        /// Signature blob (hex)
        #[arg(short, long, value_parser = parse_bytes)]
        signature: HexBytes,

        /// Digest the primary signature covers; enables signer recovery
        #[arg(short, long, value_parser = parse_hash)]
        digest: Option<Hash>,
    },
}

/// Message given either as text or as hex.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct MessageArgs {
    /// Message text (UTF-8)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Message bytes (hex)
    #[arg(long, value_parser = parse_bytes)]
    pub message_hex: Option<HexBytes>,
}

impl MessageArgs {
    pub fn bytes(&self) -> Vec<u8> {
        match (&self.message, &self.message_hex) {
            (_, Some(bytes)) => bytes.0.clone(),
            (Some(text), None) => text.as_bytes().to_vec(),
            (None, None) => Vec::new(),
        }
    }
}

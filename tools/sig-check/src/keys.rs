//! Hex argument parsing and key file loading.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use erc1271_account::{Address, AuthKeySet, Hash};
use serde::Deserialize;

/// Arbitrary-length byte string given as hex on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HexBytes(pub Vec<u8>);

/// Decode hex with an optional `0x` prefix.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, String> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    hex::decode(digits).map_err(|e| format!("invalid hex {:?}: {}", input, e))
}

fn decode_fixed<const N: usize>(input: &str) -> Result<[u8; N], String> {
    let bytes = decode_hex(input)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| format!("expected {} bytes, got {}", N, bytes.len()))
}

pub fn parse_bytes(input: &str) -> Result<HexBytes, String> {
    decode_hex(input).map(HexBytes)
}

pub fn parse_address(input: &str) -> Result<Address, String> {
    decode_fixed(input)
}

pub fn parse_hash(input: &str) -> Result<Hash, String> {
    decode_fixed(input)
}

/// On-disk key file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyFile {
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub auth_keys: Vec<String>,
}

impl KeyFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read key file {}", path.display()))?;
        Self::from_json(&contents).with_context(|| format!("invalid key file {}", path.display()))
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the key set, rejecting malformed or zero addresses.
    pub fn into_key_set(self) -> anyhow::Result<AuthKeySet> {
        let mut keys = AuthKeySet::new();

        if let Some(owner) = &self.owner {
            let owner = parse_address(owner).map_err(anyhow::Error::msg)?;
            keys.set_owner(owner).context("invalid owner")?;
        }

        for (index, key) in self.auth_keys.iter().enumerate() {
            let address = parse_address(key)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("auth_keys[{}]", index))?;
            keys.insert(address)
                .with_context(|| format!("auth_keys[{}]", index))?;
        }

        Ok(keys)
    }
}

/// Merge the key file (if any) with command-line keys. The `--owner` flag
/// replaces the file's owner.
pub fn load_key_set(
    path: Option<&Path>,
    owner: Option<Address>,
    extra: &[Address],
) -> anyhow::Result<AuthKeySet> {
    let mut keys = match path {
        Some(path) => KeyFile::load(path)?.into_key_set()?,
        None => AuthKeySet::new(),
    };

    if let Some(owner) = owner {
        keys.set_owner(owner).context("invalid --owner")?;
    }
    for key in extra {
        keys.insert(*key).context("invalid --auth-key")?;
    }

    if keys.is_empty() {
        bail!("no auth keys configured; pass --keys, --owner or --auth-key");
    }

    Ok(keys)
}

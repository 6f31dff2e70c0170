//! # Key Authority
//!
//! The account's set of permanently authorized signers. Login keys are never
//! members: they are authorized per call by a delegation, and a login key can
//! never delegate further.

use super::entities::Address;
use super::errors::KeySetError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const ZERO_ADDRESS: Address = [0u8; 20];

/// Snapshot of the account owner and registered auth keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthKeySet {
    owner: Option<Address>,
    auth_keys: BTreeSet<Address>,
}

impl AuthKeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from an owner and auth keys.
    pub fn from_keys(
        owner: Option<Address>,
        auth_keys: impl IntoIterator<Item = Address>,
    ) -> Result<Self, KeySetError> {
        let mut set = Self::new();
        if let Some(owner) = owner {
            set.set_owner(owner)?;
        }
        for key in auth_keys {
            set.insert(key)?;
        }
        Ok(set)
    }

    pub fn with_owner(mut self, owner: Address) -> Result<Self, KeySetError> {
        self.set_owner(owner)?;
        Ok(self)
    }

    pub fn with_auth_key(mut self, key: Address) -> Result<Self, KeySetError> {
        self.insert(key)?;
        Ok(self)
    }

    pub fn set_owner(&mut self, owner: Address) -> Result<(), KeySetError> {
        reject_zero(&owner)?;
        self.owner = Some(owner);
        Ok(())
    }

    /// Register an auth key. Returns false if it was already present.
    pub fn insert(&mut self, key: Address) -> Result<bool, KeySetError> {
        reject_zero(&key)?;
        Ok(self.auth_keys.insert(key))
    }

    /// Deregister an auth key. Returns false if it was not present.
    pub fn remove(&mut self, key: &Address) -> bool {
        self.auth_keys.remove(key)
    }

    /// True iff `id` is the owner or a registered auth key.
    pub fn is_auth_key(&self, id: &Address) -> bool {
        if *id == ZERO_ADDRESS {
            return false;
        }
        self.owner.as_ref() == Some(id) || self.auth_keys.contains(id)
    }

    pub fn owner(&self) -> Option<&Address> {
        self.owner.as_ref()
    }

    pub fn auth_keys(&self) -> impl Iterator<Item = &Address> {
        self.auth_keys.iter()
    }

    /// Number of distinct authorized identities, owner included.
    pub fn len(&self) -> usize {
        let owner_extra = match &self.owner {
            Some(owner) if !self.auth_keys.contains(owner) => 1,
            _ => 0,
        };
        self.auth_keys.len() + owner_extra
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn reject_zero(key: &Address) -> Result<(), KeySetError> {
    if *key == ZERO_ADDRESS {
        return Err(KeySetError::ZeroAddress);
    }
    Ok(())
}

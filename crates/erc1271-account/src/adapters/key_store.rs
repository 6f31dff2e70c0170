//! In-memory auth key store.
//!
//! Writers replace the snapshot wholesale, so a reader holding an
//! `Arc<AuthKeySet>` never observes a half-applied change.

use crate::domain::authority::AuthKeySet;
use crate::domain::entities::Address;
use crate::domain::errors::KeySetError;
use crate::ports::outbound::AuthKeySource;
use parking_lot::RwLock;
use std::convert::Infallible;
use std::sync::Arc;
use tracing::info;

/// Thread-safe, copy-on-write auth key store for one account.
#[derive(Debug, Default)]
pub struct InMemoryAuthKeyStore {
    current: RwLock<Arc<AuthKeySet>>,
}

impl InMemoryAuthKeyStore {
    pub fn new(keys: AuthKeySet) -> Self {
        Self {
            current: RwLock::new(Arc::new(keys)),
        }
    }

    pub fn set_owner(&self, owner: Address) -> Result<(), KeySetError> {
        self.update(|keys| keys.set_owner(owner))?;
        info!(owner = %hex::encode(owner), "Account owner set");
        Ok(())
    }

    /// Register an auth key. Returns false if it was already present.
    pub fn add_auth_key(&self, key: Address) -> Result<bool, KeySetError> {
        let added = self.update(|keys| keys.insert(key))?;
        if added {
            info!(auth_key = %hex::encode(key), "Auth key added");
        }
        Ok(added)
    }

    /// Deregister an auth key. Returns false if it was not present.
    pub fn remove_auth_key(&self, key: &Address) -> bool {
        let Ok(removed) = self.update(|keys| Ok::<_, Infallible>(keys.remove(key)));
        if removed {
            info!(auth_key = %hex::encode(key), "Auth key removed");
        }
        removed
    }

    fn update<R, E>(&self, f: impl FnOnce(&mut AuthKeySet) -> Result<R, E>) -> Result<R, E> {
        let mut guard = self.current.write();
        let mut next = AuthKeySet::clone(&guard);
        let result = f(&mut next)?;
        *guard = Arc::new(next);
        Ok(result)
    }
}

impl AuthKeySource for InMemoryAuthKeyStore {
    fn snapshot(&self) -> Arc<AuthKeySet> {
        Arc::clone(&self.current.read())
    }
}

impl AuthKeySource for Arc<InMemoryAuthKeyStore> {
    fn snapshot(&self) -> Arc<AuthKeySet> {
        InMemoryAuthKeyStore::snapshot(self)
    }
}

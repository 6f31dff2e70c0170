//! Shared account fixtures.

use std::sync::Arc;

use erc1271_account::test_helpers::TestKey;
use erc1271_account::{
    AuthKeySet, Erc1271Validator, FixedTimeSource, InMemoryAuthKeyStore, ValidatorConfig,
};

/// Arbitrary expiration used across scenarios (2023-01-09).
pub const EXPIRATION: u64 = 1_673_256_750;

pub const HELLO: &[u8] = b"Hello, World!";
pub const GOODBYE: &[u8] = b"Goodbye, World!";

pub type TestValidator = Erc1271Validator<Arc<InMemoryAuthKeyStore>, Arc<FixedTimeSource>>;

/// An account with one owner and one registered auth key, plus an
/// unregistered login key and a stranger.
pub struct Account {
    pub owner: TestKey,
    pub auth_key: TestKey,
    pub login_key: TestKey,
    pub stranger: TestKey,
    pub store: Arc<InMemoryAuthKeyStore>,
    pub clock: Arc<FixedTimeSource>,
    pub validator: TestValidator,
}

impl Account {
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        let owner = TestKey::from_secret([0x01; 32]);
        let auth_key = TestKey::from_secret([0x02; 32]);
        let login_key = TestKey::from_secret([0x03; 32]);
        let stranger = TestKey::from_secret([0x04; 32]);

        let keys = AuthKeySet::from_keys(Some(owner.address()), [auth_key.address()])
            .expect("fixture keys are non-zero");
        let store = Arc::new(InMemoryAuthKeyStore::new(keys));
        // One hour before the fixture expiration
        let clock = Arc::new(FixedTimeSource::new(EXPIRATION - 3600));
        let validator =
            Erc1271Validator::with_clock(Arc::clone(&store), Arc::clone(&clock), config);

        Self {
            owner,
            auth_key,
            login_key,
            stranger,
            store,
            clock,
            validator,
        }
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

use std::sync::Arc;
use uuid::Uuid;

use crate::auth::JwtAuth;
use crate::database::MemoryContactStore;
use crate::services::ContactService;

pub const TEST_JWT_SECRET: &str = "test-secret";

/// Service wired to a fresh in-memory store, for unit tests
pub struct TestContext {
    pub store: Arc<MemoryContactStore>,
    pub service: ContactService,
    pub jwt: JwtAuth,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(MemoryContactStore::new());
        let service = ContactService::new(store.clone());
        let jwt = JwtAuth::new(TEST_JWT_SECRET, 1).expect("non-empty test secret");

        Self { store, service, jwt }
    }

    /// Bearer token for `user`, signed with the test secret
    pub fn token_for(&self, user: Uuid) -> String {
        self.jwt.generate(user).expect("token generation")
    }
}

use std::sync::Arc;

use crate::auth::JwtAuth;
use crate::database::ContactStore;
use crate::services::ContactService;

/// Shared application state handed to every handler through `State`
#[derive(Clone)]
pub struct AppState {
    pub contacts: ContactService,
    pub jwt: JwtAuth,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>, jwt: JwtAuth) -> Self {
        Self {
            contacts: ContactService::new(store),
            jwt,
        }
    }
}

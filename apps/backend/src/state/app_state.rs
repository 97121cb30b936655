use std::sync::Arc;

use crate::auth::TokenMaker;
use crate::repos::Store;

use super::security_config::SecurityConfig;

/// Application state shared by all workers.
#[derive(Clone)]
pub struct AppState {
    /// Persistence collaborator
    pub store: Arc<dyn Store>,
    /// Issues and verifies access tokens
    pub token_maker: Arc<dyn TokenMaker>,
    /// Key material and token lifetime
    pub security: SecurityConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn Store>,
        token_maker: Arc<dyn TokenMaker>,
        security: SecurityConfig,
    ) -> Self {
        Self {
            store,
            token_maker,
            security,
        }
    }
}

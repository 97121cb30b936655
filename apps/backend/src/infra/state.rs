use std::sync::Arc;

use crate::config::DbSettings;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::repos::{SeaStore, Store};
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: Option<SecurityConfig>,
    db: Option<DbSettings>,
    store: Option<Arc<dyn Store>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: None,
            db: None,
            store: None,
        }
    }

    /// Connect a [`SeaStore`] with these settings at build time.
    pub fn with_db(mut self, settings: DbSettings) -> Self {
        self.db = Some(settings);
        self
    }

    /// Use an already constructed store; takes precedence over `with_db`.
    pub fn with_store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = Some(security_config);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let security = self
            .security_config
            .ok_or_else(|| AppError::config("security configuration is required"))?;
        // A wrong-length key or an unusable lifetime is fatal here, before any request is served.
        security.check_token_duration()?;
        let token_maker = Arc::new(security.token_maker()?);

        let store: Arc<dyn Store> = match (self.store, self.db) {
            (Some(store), _) => store,
            (None, Some(settings)) => {
                let conn = bootstrap_db(&settings.url, settings.create_schema).await?;
                Arc::new(SeaStore::new(conn))
            }
            (None, None) => return Err(AppError::config("no store or database configured")),
        };

        Ok(AppState::new(store, token_maker, security))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn security(key: &[u8]) -> SecurityConfig {
        SecurityConfig::new(key.to_vec(), time::Duration::minutes(15))
    }

    #[tokio::test]
    async fn build_requires_security() {
        let err = build_state().build().await.err().unwrap();
        assert!(matches!(err, AppError::Config { .. }));
    }

    #[tokio::test]
    async fn build_rejects_wrong_key_size() {
        let err = build_state()
            .with_security(security(b"abc"))
            .build()
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Config { .. }));
        assert!(err.to_string().contains("invalid key size"));
    }

    #[tokio::test]
    async fn build_rejects_oversized_token_duration() {
        let err = build_state()
            .with_security(SecurityConfig::new(
                b"0123456789abcdef0123456789abcdef".to_vec(),
                time::Duration::seconds(1_000_000_000_000),
            ))
            .build()
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Config { .. }));
        assert!(err.to_string().contains("token duration"));
    }

    #[tokio::test]
    async fn build_requires_store() {
        let err = build_state()
            .with_security(security(b"0123456789abcdef0123456789abcdef"))
            .build()
            .await
            .err()
            .unwrap();
        assert!(err.to_string().contains("no store"));
    }

    #[tokio::test]
    async fn build_with_sqlite_memory_creates_schema() {
        let state = build_state()
            .with_security(security(b"0123456789abcdef0123456789abcdef"))
            .with_db(DbSettings {
                url: "sqlite::memory:".to_string(),
                create_schema: true,
            })
            .build()
            .await
            .unwrap();

        state.store.ping().await.unwrap();
        let page = state.store.list_authors(crate::repos::Page::new(1, 5)).await.unwrap();
        assert!(page.is_empty());
    }
}

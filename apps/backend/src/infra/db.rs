use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::info;

use crate::entities::{Authors, Recipes};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::map_db_err;

/// Open a connection pool for `url`. No schema changes are made.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(url.to_owned());
    opts.connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    // In-memory SQLite is per connection; a single pinned connection keeps one database.
    if url.starts_with("sqlite::memory:") || url.contains("mode=memory") {
        opts.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(opts)
        .await
        .map_err(|e| AppError::from(map_db_err(e)))?;
    Ok(conn)
}

/// Create the `authors` and `recipes` tables from the entity definitions,
/// skipping any that already exist. Authors first, for the foreign key.
pub async fn ensure_schema(conn: &DatabaseConnection) -> Result<(), DomainError> {
    let backend = conn.get_database_backend();
    let schema = Schema::new(backend);

    let mut authors = schema.create_table_from_entity(Authors);
    let mut recipes = schema.create_table_from_entity(Recipes);

    for stmt in [authors.if_not_exists(), recipes.if_not_exists()] {
        conn.execute(backend.build(&*stmt))
            .await
            .map_err(map_db_err)?;
    }

    info!(backend = ?backend, "Schema ensured");
    Ok(())
}

/// Connect and, when asked, create missing tables.
pub async fn bootstrap_db(url: &str, create_schema: bool) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(url).await?;
    if create_schema {
        ensure_schema(&conn).await?;
    }
    Ok(conn)
}

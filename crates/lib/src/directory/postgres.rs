//! Postgres-backed directory: `users(contactnumber, propertyname)`.

use super::{DirectoryEntry, DirectoryError, UserDirectory};
use crate::channels::SenderId;
use crate::config::ResolvedDatabase;
use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::time::Duration;

const LOOKUP_SQL: &str = "SELECT propertyname FROM users WHERE contactnumber = $1";

/// Directory over a lazily connected pool; an unreachable database surfaces as a lookup error, not a startup failure.
#[derive(Clone)]
pub struct PostgresDirectory {
    pool: PgPool,
    timeout_secs: u64,
}

impl PostgresDirectory {
    pub fn connect_lazy(db: &ResolvedDatabase, timeout_secs: u64) -> Self {
        let mut opts = PgConnectOptions::new().host(&db.host).port(db.port);
        if let Some(ref user) = db.user {
            opts = opts.username(user);
        }
        if let Some(ref password) = db.password {
            opts = opts.password(password);
        }
        if let Some(ref database) = db.database {
            opts = opts.database(database);
        }
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(timeout_secs))
            .connect_lazy_with(opts);
        log::info!(
            "user directory: postgres at {}:{} (connects on first lookup)",
            db.host,
            db.port
        );
        Self { pool, timeout_secs }
    }
}

#[async_trait]
impl UserDirectory for PostgresDirectory {
    async fn lookup(&self, phone: &SenderId) -> Result<Option<DirectoryEntry>, DirectoryError> {
        let query = sqlx::query_as::<_, (Option<String>,)>(LOOKUP_SQL)
            .bind(phone.as_str())
            .fetch_optional(&self.pool);
        let row = tokio::time::timeout(Duration::from_secs(self.timeout_secs), query)
            .await
            .map_err(|_| DirectoryError::Timeout(self.timeout_secs))??;
        Ok(row.map(|(property_name,)| DirectoryEntry {
            phone: phone.as_str().to_string(),
            property_name: property_name
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }))
    }
}

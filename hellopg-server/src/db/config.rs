//! Connection configuration sourced from the process environment

use std::fmt;

use sqlx::postgres::PgConnectOptions;

use crate::error::DbError;

pub const DB_HOST: &str = "DB_HOST";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASS: &str = "DB_PASS";
pub const DB_NAME: &str = "DB_NAME";

/// PostgreSQL connection settings.
///
/// Every field is optional at construction time. A connection can only
/// succeed when all four are present and non-empty, but that is checked
/// on first use of the handle (or eagerly through [`DbConfig::validate`]).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DbConfig {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
}

impl DbConfig {
    /// Read the four `DB_*` variables. Unset or non-unicode values become `None`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            host: lookup(DB_HOST),
            user: lookup(DB_USER),
            password: lookup(DB_PASS),
            database: lookup(DB_NAME),
        }
    }

    /// Names of the variables that are unset or empty, in declaration order.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (DB_HOST, &self.host),
            (DB_USER, &self.user),
            (DB_PASS, &self.password),
            (DB_NAME, &self.database),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(name, _)| name)
        .collect()
    }

    /// Fail fast when anything is missing.
    pub fn validate(&self) -> Result<(), DbError> {
        let vars = self.missing();
        if vars.is_empty() {
            Ok(())
        } else {
            Err(DbError::MissingConfig { vars })
        }
    }

    /// Connection options carrying the configured values unchanged.
    ///
    /// Absent fields keep sqlx's defaults; `.pgpass` is never consulted.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new_without_pgpass();
        if let Some(host) = &self.host {
            options = options.host(host);
        }
        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }
        if let Some(database) = &self.database {
            options = options.database(database);
        }
        options
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .finish()
    }
}

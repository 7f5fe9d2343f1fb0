//! Error types for hellopg-server

use thiserror::Error;

/// Database provider errors.
///
/// Configuration problems are reported when the handle is first used,
/// unless the caller validates eagerly with [`crate::DbConfig::validate`].
#[derive(Error, Debug)]
pub enum DbError {
    #[error("missing database configuration: {}", vars.join(", "))]
    MissingConfig { vars: Vec<&'static str> },

    #[error("database handle already initialized")]
    AlreadyInitialized,

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// HTTP server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_lists_every_variable() {
        let err = DbError::MissingConfig {
            vars: vec!["DB_HOST", "DB_PASS"],
        };
        assert_eq!(
            err.to_string(),
            "missing database configuration: DB_HOST, DB_PASS"
        );
    }
}

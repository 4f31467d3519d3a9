use thiserror::Error;

/// Failures of the durable key-value layer.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("storage lock poisoned")]
    Poisoned,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),

    #[error("catalog serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("session expired")]
    Expired,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("admin role required")]
    Forbidden,

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("token generation failed: {0}")]
    Generation(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Top-level error for application start-up.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

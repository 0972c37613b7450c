use thiserror::Error;

/// Errors from the interface registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("method set {0} is already declared")]
    Duplicate(String),

    #[error("method set {interface} includes undeclared method set {include}")]
    UnknownInclude { interface: String, include: String },

    #[error("method set {0} is not declared")]
    NotFound(String),

    #[error("invalid interface document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    #[error("registry lock poisoned")]
    LockPoisoned,
}

/// Convenience result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

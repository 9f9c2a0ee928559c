//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the security autoconfiguration crate
#[derive(Error, Debug)]
pub enum Error {
    /// Registry rejected a registration (duplicate identifier or capability)
    #[error("Registration error: {message}")]
    Registration {
        /// Description of the rejected registration
        message: String,
    },

    /// Requested object or factory is not present in the registry
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Stored object does not match the requested capability type
    #[error("Type mismatch: {message}")]
    TypeMismatch {
        /// Description of the mismatch
        message: String,
    },

    /// Configuration construction failed; carries the original cause
    #[error("Construction error: {message}")]
    Construction {
        /// Description of the construction failure
        message: String,
        /// The underlying failure
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Collaborator attachment was rejected by the configuration object
    #[error("Collaborator error: {message}")]
    Collaborator {
        /// Description of the rejected attachment
        message: String,
    },

    /// Internal error (lock poisoning and similar unrecoverable states)
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

impl Error {
    /// Create a registration error
    pub fn registration(message: impl Into<String>) -> Self {
        Self::Registration {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a type-mismatch error
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: message.into(),
        }
    }

    /// Create a construction error wrapping its original cause
    pub fn construction(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Construction {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a collaborator-attachment error
    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::Collaborator {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

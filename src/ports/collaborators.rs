//! Collaborator interfaces attached to the security configuration
//!
//! All collaborators are optional from the initializer's point of view; each
//! trait is deliberately narrow since the initializer only wires them, never
//! drives them.

use crate::error::Result;
use crate::ports::registry::AnyObject;

/// Verifies a principal's credentials
pub trait AuthenticationManager: Send + Sync {
    /// Check whether the given credential is valid for the principal
    fn authenticate(&self, username: &str, credential: &str) -> Result<bool>;
}

/// Stored account data returned by a [`UserLookupService`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Principal name
    pub username: String,
    /// Hashed credential
    pub credential_hash: String,
    /// Granted authorities
    pub authorities: Vec<String>,
}

/// Resolves stored account data by principal name
pub trait UserLookupService: Send + Sync {
    /// Look up the account for the given principal
    fn lookup_user(&self, username: &str) -> Result<UserRecord>;
}

/// Hashes and verifies credentials
pub trait CredentialHasher: Send + Sync {
    /// Hash a raw credential for storage
    fn hash(&self, raw: &str) -> String;
    /// Verify a raw credential against a stored hash
    fn verify(&self, raw: &str, hashed: &str) -> bool;
}

/// Registry-level hook applied to freshly built configuration objects
///
/// Resolved from the registry on every factory invocation; its absence is a
/// wiring error, not a recoverable condition.
pub trait ObjectPostProcessor: Send + Sync {
    /// Post-process a freshly built object, returning the instance to use
    fn post_process(&self, object: AnyObject) -> AnyObject;
}

//! Null and in-memory collaborator implementations
//!
//! Usable as defaults in tests and local development; none of them perform
//! real security work.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{Error, Result};
use crate::locks::{lock_rwlock_read, lock_rwlock_write};
use crate::ports::collaborators::{
    AuthenticationManager, CredentialHasher, ObjectPostProcessor, UserLookupService, UserRecord,
};
use crate::ports::registry::AnyObject;

/// Authentication manager that rejects every credential
#[derive(Debug, Default)]
pub struct NullAuthenticationManager;

impl NullAuthenticationManager {
    /// Create a new null authentication manager
    pub fn new() -> Self {
        Self
    }
}

impl AuthenticationManager for NullAuthenticationManager {
    fn authenticate(&self, _username: &str, _credential: &str) -> Result<bool> {
        Ok(false)
    }
}

/// User-lookup service backed by an in-process map
#[derive(Debug, Default)]
pub struct InMemoryUserLookup {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryUserLookup {
    /// Create an empty lookup service
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user record
    pub fn insert(&self, record: UserRecord) -> Result<()> {
        lock_rwlock_write(&self.users, "InMemoryUserLookup::insert")?
            .insert(record.username.clone(), record);
        Ok(())
    }
}

impl UserLookupService for InMemoryUserLookup {
    fn lookup_user(&self, username: &str) -> Result<UserRecord> {
        lock_rwlock_read(&self.users, "InMemoryUserLookup::lookup_user")?
            .get(username)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("User '{username}' not found")))
    }
}

/// Identity credential hasher
///
/// Stores credentials verbatim; never use outside tests and local
/// development.
#[derive(Debug, Default)]
pub struct PlainCredentialHasher;

impl PlainCredentialHasher {
    /// Create a new plain hasher
    pub fn new() -> Self {
        Self
    }
}

impl CredentialHasher for PlainCredentialHasher {
    fn hash(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn verify(&self, raw: &str, hashed: &str) -> bool {
        raw == hashed
    }
}

/// Post-processor that returns objects unchanged
#[derive(Debug, Default)]
pub struct NoOpPostProcessor;

impl NoOpPostProcessor {
    /// Create a new no-op post-processor
    pub fn new() -> Self {
        Self
    }
}

impl ObjectPostProcessor for NoOpPostProcessor {
    fn post_process(&self, object: AnyObject) -> AnyObject {
        object
    }
}

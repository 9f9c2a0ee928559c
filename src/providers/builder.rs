//! Standard security configuration builder
//!
//! Working default implementation of the builder port. The configuration it
//! produces keeps a small, ordered filter-chain surface and a single
//! user-lookup slot; anything richer belongs to a caller-supplied builder.

use std::any::Any;
use std::sync::{Arc, RwLock};

use crate::error::{Error, Result};
use crate::locks::{lock_rwlock_read, lock_rwlock_write};
use crate::ports::collaborators::{AuthenticationManager, ObjectPostProcessor, UserLookupService};
use crate::ports::config::{SecurityBuilder, SecurityConfiguration};
use crate::ports::registry::{AnyObject, ObjectRegistry};

/// Security configuration produced by [`StandardSecurityBuilder`]
pub struct StandardSecurityConfiguration {
    authentication_manager: Option<Arc<dyn AuthenticationManager>>,
    user_lookup: RwLock<Option<Arc<dyn UserLookupService>>>,
    filters: RwLock<Vec<String>>,
}

impl StandardSecurityConfiguration {
    fn new(authentication_manager: Option<Arc<dyn AuthenticationManager>>) -> Self {
        Self {
            authentication_manager,
            user_lookup: RwLock::new(None),
            filters: RwLock::new(Vec::new()),
        }
    }

    /// The authentication manager attached at build time, if any
    pub fn authentication_manager(&self) -> Option<Arc<dyn AuthenticationManager>> {
        self.authentication_manager.clone()
    }

    /// The user-lookup service attached after build, if any
    pub fn user_lookup(&self) -> Result<Option<Arc<dyn UserLookupService>>> {
        Ok(lock_rwlock_read(
            &self.user_lookup,
            "StandardSecurityConfiguration::user_lookup",
        )?
        .clone())
    }

    /// Append a named filter to the chain
    pub fn add_filter(&self, name: impl Into<String>) -> Result<()> {
        lock_rwlock_write(&self.filters, "StandardSecurityConfiguration::add_filter")?
            .push(name.into());
        Ok(())
    }

    /// Names of the configured filters, in attachment order
    pub fn filter_names(&self) -> Result<Vec<String>> {
        Ok(lock_rwlock_read(
            &self.filters,
            "StandardSecurityConfiguration::filter_names",
        )?
        .clone())
    }
}

impl SecurityConfiguration for StandardSecurityConfiguration {
    fn attach_user_lookup(&self, service: Arc<dyn UserLookupService>) -> Result<()> {
        let mut slot = lock_rwlock_write(
            &self.user_lookup,
            "StandardSecurityConfiguration::attach_user_lookup",
        )?;

        if slot.is_some() {
            return Err(Error::collaborator(
                "User lookup service already attached",
            ));
        }

        *slot = Some(service);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl std::fmt::Debug for StandardSecurityConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardSecurityConfiguration")
            .field("authentication_manager", &self.authentication_manager.is_some())
            .finish_non_exhaustive()
    }
}

/// Default [`SecurityBuilder`]: assembles a [`StandardSecurityConfiguration`]
/// and runs it through the registry's post-processor hook
#[derive(Debug, Default)]
pub struct StandardSecurityBuilder;

impl StandardSecurityBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self
    }
}

impl SecurityBuilder for StandardSecurityBuilder {
    fn build(
        &self,
        _registry: &dyn ObjectRegistry,
        post_processor: Arc<dyn ObjectPostProcessor>,
        authentication_manager: Option<Arc<dyn AuthenticationManager>>,
    ) -> Result<Arc<dyn SecurityConfiguration>> {
        let configuration: Arc<dyn SecurityConfiguration> =
            Arc::new(StandardSecurityConfiguration::new(authentication_manager));

        let processed =
            post_processor.post_process(Arc::new(configuration.clone()) as AnyObject);

        processed
            .downcast::<Arc<dyn SecurityConfiguration>>()
            .map(|c| (*c).clone())
            .map_err(|_| {
                Error::type_mismatch("Post-processor returned an unrelated object type")
            })
    }
}

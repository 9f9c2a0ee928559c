//! Configuration builder interfaces
//!
//! The security configuration and its builder are opaque to the initializer:
//! what options the configuration exposes and how it composes filter chains
//! is the builder's business. The initializer only needs a way to build one
//! and a best-effort setter for the optional user-lookup collaborator.

use std::any::Any;
use std::sync::Arc;

use crate::error::Result;
use crate::ports::collaborators::{AuthenticationManager, ObjectPostProcessor, UserLookupService};
use crate::ports::registry::ObjectRegistry;

/// A built security configuration object
///
/// Ownership transfers to the registry/caller on construction; the
/// initializer keeps no reference after returning it.
pub trait SecurityConfiguration: Send + Sync {
    /// Attach the optional user-lookup collaborator
    ///
    /// Implementations may reject the attachment; the initializer treats a
    /// rejection as a contained error.
    fn attach_user_lookup(&self, service: Arc<dyn UserLookupService>) -> Result<()>;

    /// Downcast seam for caller-authored customizers
    fn as_any(&self) -> &dyn Any;
}

/// Builds [`SecurityConfiguration`] instances on demand
pub trait SecurityBuilder: Send + Sync {
    /// Build a configuration against the given backing registry
    ///
    /// The post-processor has already been resolved by the caller; the
    /// authentication manager, when present, must be attached before the
    /// configuration is assembled.
    fn build(
        &self,
        registry: &dyn ObjectRegistry,
        post_processor: Arc<dyn ObjectPostProcessor>,
        authentication_manager: Option<Arc<dyn AuthenticationManager>>,
    ) -> Result<Arc<dyn SecurityConfiguration>>;
}

/// Caller-authored customization callback
///
/// Invoked exactly once per successful factory invocation, after all
/// collaborators are attached. Failures are caller-owned and propagate.
pub type SecurityCustomizer = Arc<dyn Fn(&dyn SecurityConfiguration) -> Result<()> + Send + Sync>;

//! Deferred registration of HTTP security configuration into an object
//! registry.
//!
//! The crate centers on [`HttpSecurityInitializer`]: at application start it
//! registers a named, per-request factory with an [`ObjectRegistry`]; the
//! factory builds the security configuration only when a consumer actually
//! requests it, attaches whatever optional collaborators were supplied, runs
//! the caller's customization callback, and hands the instance over.
//!
//! Error containment is asymmetric on purpose: a failing build or a missing
//! post-processor hook aborts the factory invocation loudly, while a failing
//! user-lookup attachment is reported through the diagnostics sink and the
//! configuration is returned without that one enhancement.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use security_autoconfig::initializer::{HttpSecurityInitializer, HTTP_SECURITY_IDENTIFIER};
//! use security_autoconfig::ports::collaborators::ObjectPostProcessor;
//! use security_autoconfig::ports::config::{SecurityConfiguration, SecurityCustomizer};
//! use security_autoconfig::ports::registry::ObjectRegistryExt;
//! use security_autoconfig::providers::{NoOpPostProcessor, StandardSecurityBuilder};
//! use security_autoconfig::registry::InMemoryRegistry;
//!
//! # fn main() -> security_autoconfig::Result<()> {
//! let registry = InMemoryRegistry::new();
//! registry.register_capability::<dyn ObjectPostProcessor>(Arc::new(NoOpPostProcessor::new()))?;
//!
//! let customizer: SecurityCustomizer =
//!     Arc::new(|_configuration: &dyn SecurityConfiguration| Ok(()));
//! let initializer =
//!     HttpSecurityInitializer::new(Arc::new(StandardSecurityBuilder::new()), customizer);
//! initializer.initialize(&registry)?;
//!
//! // Construction happens here, not above.
//! let configuration =
//!     registry.lookup_named::<dyn SecurityConfiguration>(HTTP_SECURITY_IDENTIFIER)?;
//! # let _ = configuration;
//! # Ok(())
//! # }
//! ```

pub mod diagnostics;
pub mod error;
pub mod initializer;
mod locks;
pub mod ports;
pub mod providers;
pub mod registry;

pub use error::{Error, Result};
pub use initializer::{HTTP_SECURITY_IDENTIFIER, HttpSecurityInitializer};

//! Deferred registration of the HTTP security configuration
//!
//! [`HttpSecurityInitializer`] bridges an immutable collaborator snapshot and
//! a caller-authored customizer into a registry-compatible factory. At
//! application start it registers the factory under a well-known identifier;
//! the registry invokes it only when a consumer actually requests the
//! configuration, possibly much later and, with the per-request scope, more
//! than once.

use std::any::TypeId;
use std::sync::Arc;

use tracing::info;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingDiagnostics};
use crate::error::{Error, Result};
use crate::ports::collaborators::{
    AuthenticationManager, CredentialHasher, ObjectPostProcessor, UserLookupService,
};
use crate::ports::config::{SecurityBuilder, SecurityConfiguration, SecurityCustomizer};
use crate::ports::registry::{
    AnyObject, FactoryOptions, ObjectFactory, ObjectRegistry, ObjectRegistryExt, RegistrationSpec,
    Scope,
};

/// Well-known registry identifier for the deferred HTTP security configuration
///
/// Consumers that look the configuration up by this literal name are a
/// persisted contract; the value must stay stable across versions.
pub const HTTP_SECURITY_IDENTIFIER: &str =
    "security_autoconfig.HttpSecurityConfiguration.httpSecurity";

/// Registers a deferred, per-request HTTP security configuration factory
///
/// The collaborator snapshot is taken at construction time and never mutated
/// afterwards, so it can be shared freely across concurrent factory
/// invocations. The initializer itself is stateless once [`initialize`] has
/// run; each invocation of the registered factory is independent.
///
/// [`initialize`]: HttpSecurityInitializer::initialize
pub struct HttpSecurityInitializer {
    builder: Arc<dyn SecurityBuilder>,
    customizer: SecurityCustomizer,
    authentication_manager: Option<Arc<dyn AuthenticationManager>>,
    user_lookup: Option<Arc<dyn UserLookupService>>,
    credential_hasher: Option<Arc<dyn CredentialHasher>>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl HttpSecurityInitializer {
    /// Create an initializer with no optional collaborators
    pub fn new(builder: Arc<dyn SecurityBuilder>, customizer: SecurityCustomizer) -> Self {
        Self {
            builder,
            customizer,
            authentication_manager: None,
            user_lookup: None,
            credential_hasher: None,
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Supply the authentication manager, attached to the builder context
    /// before each build
    pub fn with_authentication_manager(mut self, manager: Arc<dyn AuthenticationManager>) -> Self {
        self.authentication_manager = Some(manager);
        self
    }

    /// Supply the user-lookup service, attached to each built configuration
    /// on a best-effort basis
    pub fn with_user_lookup(mut self, service: Arc<dyn UserLookupService>) -> Self {
        self.user_lookup = Some(service);
        self
    }

    /// Supply the credential hasher, registered eagerly as a singleton during
    /// [`initialize`](Self::initialize)
    pub fn with_credential_hasher(mut self, hasher: Arc<dyn CredentialHasher>) -> Self {
        self.credential_hasher = Some(hasher);
        self
    }

    /// Replace the sink receiving contained attachment errors
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Register the deferred factory (and the credential hasher, if supplied)
    /// with the given registry
    ///
    /// Safe to call at most once per initializer instance. Registry
    /// rejections propagate untouched.
    pub fn initialize(&self, registry: &dyn ObjectRegistry) -> Result<()> {
        if let Some(hasher) = &self.credential_hasher {
            registry.register_capability::<dyn CredentialHasher>(hasher.clone())?;
            info!("Registered credential hasher as singleton");
        }

        let state = Arc::new(FactoryState {
            builder: self.builder.clone(),
            customizer: self.customizer.clone(),
            authentication_manager: self.authentication_manager.clone(),
            user_lookup: self.user_lookup.clone(),
            diagnostics: self.diagnostics.clone(),
        });

        let factory: ObjectFactory = Arc::new(move |registry: &dyn ObjectRegistry| {
            let configuration = state.construct(registry)?;
            Ok(Arc::new(configuration) as AnyObject)
        });

        registry.register_factory(RegistrationSpec {
            identifier: HTTP_SECURITY_IDENTIFIER.to_string(),
            produced_type: TypeId::of::<dyn SecurityConfiguration>(),
            factory,
            options: FactoryOptions {
                scope: Scope::PerRequest,
                autowire_eligible: true,
            },
        })?;

        info!(
            identifier = HTTP_SECURITY_IDENTIFIER,
            "Registered deferred http security factory"
        );
        Ok(())
    }
}

impl std::fmt::Debug for HttpSecurityInitializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSecurityInitializer")
            .field("authentication_manager", &self.authentication_manager.is_some())
            .field("user_lookup", &self.user_lookup.is_some())
            .field("credential_hasher", &self.credential_hasher.is_some())
            .finish_non_exhaustive()
    }
}

/// Immutable snapshot captured by the registered factory
struct FactoryState {
    builder: Arc<dyn SecurityBuilder>,
    customizer: SecurityCustomizer,
    authentication_manager: Option<Arc<dyn AuthenticationManager>>,
    user_lookup: Option<Arc<dyn UserLookupService>>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl FactoryState {
    /// One factory invocation: resolve hook, build, decorate, customize
    ///
    /// Attachment order is fixed: post-processor resolution, authentication
    /// manager at build time, build, best-effort user-lookup attachment,
    /// customizer. Reordering the last two changes observable behavior.
    fn construct(&self, registry: &dyn ObjectRegistry) -> Result<Arc<dyn SecurityConfiguration>> {
        // Required hook; a missing post-processor is a wiring error.
        let post_processor = registry.lookup_capability::<dyn ObjectPostProcessor>()?;

        let configuration = self
            .builder
            .build(
                registry,
                post_processor,
                self.authentication_manager.clone(),
            )
            .map_err(|source| {
                Error::construction("Failed to build http security configuration", source)
            })?;

        if let Some(user_lookup) = &self.user_lookup {
            // Contained: an optional enhancement must never break an
            // otherwise valid configuration.
            if let Err(error) = configuration.attach_user_lookup(user_lookup.clone()) {
                self.diagnostics.report(Diagnostic::new(
                    "user_lookup",
                    format!("Failed to attach user lookup service: {error}"),
                ));
            }
        }

        (self.customizer)(configuration.as_ref())?;

        Ok(configuration)
    }
}

//! Tests for the in-memory object registry
//!
//! Exercises the registry capability surface the initializer relies on:
//! typed registration and lookup, duplicate rejection, scope handling, and
//! autowire-eligible resolution by produced type.

use std::any::TypeId;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use security_autoconfig::error::Error;
use security_autoconfig::ports::collaborators::CredentialHasher;
use security_autoconfig::ports::registry::{
    AnyObject, FactoryOptions, ObjectFactory, ObjectRegistry, ObjectRegistryExt, RegistrationSpec,
    Scope,
};
use security_autoconfig::providers::PlainCredentialHasher;
use security_autoconfig::registry::InMemoryRegistry;

fn string_factory(
    identifier: &str,
    scope: Scope,
    autowire_eligible: bool,
    counter: Arc<AtomicUsize>,
) -> RegistrationSpec {
    let factory: ObjectFactory = Arc::new(move |_registry: &dyn ObjectRegistry| {
        let invocation = counter.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(Arc::new(format!("instance-{invocation}"))) as AnyObject)
    });
    RegistrationSpec {
        identifier: identifier.to_string(),
        produced_type: TypeId::of::<String>(),
        factory,
        options: FactoryOptions {
            scope,
            autowire_eligible,
        },
    }
}

// ============================================================================
// Typed Capability Registration
// ============================================================================

#[test]
fn test_capability_registered_as_trait_object_is_resolvable() {
    let registry = InMemoryRegistry::new();

    registry
        .register_capability::<dyn CredentialHasher>(Arc::new(PlainCredentialHasher::new()))
        .expect("registration should succeed");

    let hasher = registry
        .lookup_capability::<dyn CredentialHasher>()
        .expect("hasher should be discoverable by capability type");
    assert!(hasher.verify("secret", &hasher.hash("secret")));
}

#[test]
fn test_missing_capability_is_not_found() {
    let registry = InMemoryRegistry::new();

    let result = registry.lookup_capability::<dyn CredentialHasher>();

    assert!(
        matches!(result, Err(Error::NotFound { .. })),
        "lookup of an unregistered capability should fail with NotFound"
    );
}

#[test]
fn test_named_lookup_with_wrong_type_is_a_type_mismatch() {
    let registry = InMemoryRegistry::new();
    let counter = Arc::new(AtomicUsize::new(0));
    registry
        .register_factory(string_factory("strings", Scope::PerRequest, false, counter))
        .expect("registration should succeed");

    let result = registry.lookup_named::<u64>("strings");

    assert!(
        matches!(result, Err(Error::TypeMismatch { .. })),
        "downcasting to the wrong capability type should be rejected"
    );
}

// ============================================================================
// Duplicate Rejection
// ============================================================================

#[test]
fn test_duplicate_factory_identifier_rejected() {
    let registry = InMemoryRegistry::new();
    let counter = Arc::new(AtomicUsize::new(0));

    registry
        .register_factory(string_factory("dup", Scope::PerRequest, false, counter.clone()))
        .expect("first registration should succeed");
    let result = registry.register_factory(string_factory("dup", Scope::PerRequest, false, counter));

    assert!(matches!(result, Err(Error::Registration { .. })));
}

// ============================================================================
// Scope Handling
// ============================================================================

#[test]
fn test_per_request_factory_produces_distinct_instances() {
    let registry = InMemoryRegistry::new();
    let counter = Arc::new(AtomicUsize::new(0));
    registry
        .register_factory(string_factory("fresh", Scope::PerRequest, false, counter.clone()))
        .expect("registration should succeed");

    let first = registry
        .lookup_named::<String>("fresh")
        .expect("first lookup should succeed");
    let second = registry
        .lookup_named::<String>("fresh")
        .expect("second lookup should succeed");

    assert_eq!(counter.load(Ordering::SeqCst), 2, "factory should run per lookup");
    assert_ne!(first.as_str(), second.as_str(), "instances should be independent");
}

#[test]
fn test_singleton_factory_shares_one_instance() {
    let registry = InMemoryRegistry::new();
    let counter = Arc::new(AtomicUsize::new(0));
    registry
        .register_factory(string_factory("shared", Scope::Singleton, false, counter.clone()))
        .expect("registration should succeed");

    let first = registry
        .lookup_named::<String>("shared")
        .expect("first lookup should succeed");
    let second = registry
        .lookup_named::<String>("shared")
        .expect("second lookup should succeed");

    assert_eq!(counter.load(Ordering::SeqCst), 1, "factory should run once");
    assert!(Arc::ptr_eq(&first, &second), "singleton lookups should share the instance");
}

// ============================================================================
// Autowiring
// ============================================================================

#[test]
fn test_autowire_eligible_factory_answers_type_lookup() {
    let registry = InMemoryRegistry::new();
    let counter = Arc::new(AtomicUsize::new(0));
    registry
        .register_factory(string_factory("wired", Scope::PerRequest, true, counter))
        .expect("registration should succeed");

    let value = registry
        .lookup_capability::<String>()
        .expect("type-based lookup should resolve through the eligible factory");
    assert!(value.starts_with("instance-"));
}

#[test]
fn test_non_eligible_factory_is_invisible_to_type_lookup() {
    let registry = InMemoryRegistry::new();
    let counter = Arc::new(AtomicUsize::new(0));
    registry
        .register_factory(string_factory("hidden", Scope::PerRequest, false, counter))
        .expect("registration should succeed");

    let result = registry.lookup_capability::<String>();

    assert!(
        matches!(result, Err(Error::NotFound { .. })),
        "non-autowire factories should only answer name-based lookups"
    );
}

#[test]
fn test_eager_object_wins_over_autowire_factory() {
    let registry = InMemoryRegistry::new();
    let counter = Arc::new(AtomicUsize::new(0));
    registry
        .register_factory(string_factory("shadowed", Scope::PerRequest, true, counter.clone()))
        .expect("factory registration should succeed");
    registry
        .register_capability::<String>(Arc::new(String::from("eager")))
        .expect("object registration should succeed");

    let value = registry
        .lookup_capability::<String>()
        .expect("lookup should succeed");

    assert_eq!(value.as_str(), "eager");
    assert_eq!(counter.load(Ordering::SeqCst), 0, "factory should not run");
}

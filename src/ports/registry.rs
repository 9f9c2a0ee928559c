//! Object registry capability
//!
//! The registry is an external container that owns object lifecycles and
//! resolves objects by capability type or by name. This module defines only
//! the surface the initializer consumes: eager singleton registration, named
//! scoped factory registration, and lookup.
//!
//! The registry is always passed in as an explicit argument - factories
//! receive the registry they are invoked against rather than capturing it,
//! so no ambient global state exists anywhere in the crate.

use std::any::{Any, TypeId};
use std::sync::Arc;

use crate::error::{Error, Result};

/// Type-erased object stored in the registry
///
/// Capability types are usually unsized (`dyn Trait`), so values are stored
/// double-wrapped: an `Arc<dyn Trait>` is itself placed behind an `Arc` whose
/// concrete type the lookup side downcasts to. [`ObjectRegistryExt`] hides
/// this from callers.
pub type AnyObject = Arc<dyn Any + Send + Sync>;

/// Deferred constructor invoked by the registry when a consumer requests the
/// produced object
///
/// The registry passes itself to the factory at invocation time so the
/// factory can resolve further dependencies without capturing the container.
pub type ObjectFactory = Arc<dyn Fn(&dyn ObjectRegistry) -> Result<AnyObject> + Send + Sync>;

/// Lifetime policy attached to a registered factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The factory runs once; every lookup shares the same instance
    Singleton,
    /// The factory runs on every lookup; instances are never shared
    PerRequest,
}

/// Options attached to a factory registration
#[derive(Debug, Clone, Copy)]
pub struct FactoryOptions {
    /// Lifetime policy for produced objects
    pub scope: Scope,
    /// Whether type-based lookups may resolve through this factory, in
    /// addition to lookups by its registered name
    pub autowire_eligible: bool,
}

/// A named, scoped factory registration
///
/// The identifier is computed once by the registrant and never changes
/// afterwards; consumers may rely on it as a stable contract.
pub struct RegistrationSpec {
    /// Globally unique, stable identifier for name-based lookup
    pub identifier: String,
    /// Capability type the factory produces, for autowire-eligible lookup
    pub produced_type: TypeId,
    /// The deferred constructor
    pub factory: ObjectFactory,
    /// Scope and autowiring options
    pub options: FactoryOptions,
}

/// Registry capability consumed by the initializer
pub trait ObjectRegistry: Send + Sync {
    /// Eagerly register a singleton object under a capability type
    ///
    /// Fails if the capability is already registered.
    fn register_object(&self, capability: TypeId, value: AnyObject) -> Result<()>;

    /// Register a named, scoped factory
    ///
    /// Fails if the identifier is already taken.
    fn register_factory(&self, spec: RegistrationSpec) -> Result<()>;

    /// Resolve an object by capability type
    ///
    /// Eagerly registered objects win; otherwise autowire-eligible factories
    /// producing the capability are consulted, honoring their scope.
    fn lookup(&self, capability: TypeId) -> Result<AnyObject>;

    /// Resolve an object by registered factory name, honoring its scope
    fn lookup_by_name(&self, identifier: &str) -> Result<AnyObject>;
}

/// Typed convenience layer over [`ObjectRegistry`]
///
/// Handles the `Arc<Arc<T>>` wrapping scheme described on [`AnyObject`] so
/// call sites work with `Arc<dyn Trait>` directly.
pub trait ObjectRegistryExt: ObjectRegistry {
    /// Register a singleton under the capability type `T`
    fn register_capability<T>(&self, value: Arc<T>) -> Result<()>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.register_object(TypeId::of::<T>(), Arc::new(value))
    }

    /// Resolve the capability `T` by type
    fn lookup_capability<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        downcast_stored::<T>(self.lookup(TypeId::of::<T>())?)
    }

    /// Resolve a named registration, expecting it to produce capability `T`
    fn lookup_named<T>(&self, identifier: &str) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        downcast_stored::<T>(self.lookup_by_name(identifier)?)
    }
}

impl<R: ObjectRegistry + ?Sized> ObjectRegistryExt for R {}

fn downcast_stored<T>(object: AnyObject) -> Result<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    object.downcast::<Arc<T>>().map(|v| (*v).clone()).map_err(|_| {
        Error::type_mismatch(format!(
            "Stored object is not of capability type {}",
            std::any::type_name::<T>()
        ))
    })
}

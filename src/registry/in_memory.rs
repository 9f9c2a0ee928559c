//! In-process object registry
//!
//! Minimal [`ObjectRegistry`] implementation backing tests and embedded use.
//! Eagerly registered objects live in a type-indexed map; named factories
//! honor their declared scope and, when autowire-eligible, also answer
//! type-based lookups.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{Error, Result};
use crate::locks::{lock_rwlock_read, lock_rwlock_write};
use crate::ports::registry::{AnyObject, ObjectFactory, ObjectRegistry, RegistrationSpec, Scope};

struct FactoryEntry {
    produced_type: TypeId,
    factory: ObjectFactory,
    scope: Scope,
    autowire_eligible: bool,
    /// Populated on first invocation for singleton-scoped factories
    cached: RwLock<Option<AnyObject>>,
}

/// Thread-safe object registry backed by in-process maps
#[derive(Default)]
pub struct InMemoryRegistry {
    objects: RwLock<HashMap<TypeId, AnyObject>>,
    factories: RwLock<HashMap<String, Arc<FactoryEntry>>>,
}

impl InMemoryRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoke a factory entry honoring its scope
    ///
    /// Called with no map guard held; the factory may re-enter the registry
    /// to resolve further dependencies.
    fn invoke(&self, entry: &Arc<FactoryEntry>) -> Result<AnyObject> {
        match entry.scope {
            Scope::PerRequest => (entry.factory)(self),
            Scope::Singleton => {
                if let Some(cached) =
                    lock_rwlock_read(&entry.cached, "InMemoryRegistry::invoke")?.clone()
                {
                    return Ok(cached);
                }
                let object = (entry.factory)(self)?;
                let mut cached = lock_rwlock_write(&entry.cached, "InMemoryRegistry::invoke")?;
                Ok(cached.get_or_insert(object).clone())
            }
        }
    }
}

impl ObjectRegistry for InMemoryRegistry {
    fn register_object(&self, capability: TypeId, value: AnyObject) -> Result<()> {
        let mut objects = lock_rwlock_write(&self.objects, "InMemoryRegistry::register_object")?;

        if objects.contains_key(&capability) {
            return Err(Error::registration(format!(
                "Capability {capability:?} already registered"
            )));
        }

        objects.insert(capability, value);
        Ok(())
    }

    fn register_factory(&self, spec: RegistrationSpec) -> Result<()> {
        let mut factories =
            lock_rwlock_write(&self.factories, "InMemoryRegistry::register_factory")?;

        if factories.contains_key(&spec.identifier) {
            return Err(Error::registration(format!(
                "Factory '{}' already registered",
                spec.identifier
            )));
        }

        factories.insert(
            spec.identifier.clone(),
            Arc::new(FactoryEntry {
                produced_type: spec.produced_type,
                factory: spec.factory,
                scope: spec.options.scope,
                autowire_eligible: spec.options.autowire_eligible,
                cached: RwLock::new(None),
            }),
        );
        Ok(())
    }

    fn lookup(&self, capability: TypeId) -> Result<AnyObject> {
        let object = lock_rwlock_read(&self.objects, "InMemoryRegistry::lookup")?
            .get(&capability)
            .cloned();
        if let Some(object) = object {
            return Ok(object);
        }

        // Fall back to autowire-eligible factories producing this capability.
        let entry = {
            let factories = lock_rwlock_read(&self.factories, "InMemoryRegistry::lookup")?;
            factories
                .values()
                .find(|entry| entry.autowire_eligible && entry.produced_type == capability)
                .cloned()
        };

        match entry {
            Some(entry) => self.invoke(&entry),
            None => Err(Error::not_found(format!(
                "No object or autowire-eligible factory for capability {capability:?}"
            ))),
        }
    }

    fn lookup_by_name(&self, identifier: &str) -> Result<AnyObject> {
        let entry = {
            let factories = lock_rwlock_read(&self.factories, "InMemoryRegistry::lookup_by_name")?;
            factories.get(identifier).cloned()
        };

        match entry {
            Some(entry) => self.invoke(&entry),
            None => Err(Error::not_found(format!(
                "Factory '{identifier}' not registered"
            ))),
        }
    }
}

//! Port traits consumed and exposed by the initializer
//!
//! The initializer talks to its surroundings exclusively through these narrow
//! interfaces: the object registry it registers into, the collaborators it
//! attaches, and the opaque configuration builder it drives.

pub mod collaborators;
pub mod config;
pub mod registry;

pub use collaborators::{
    AuthenticationManager, CredentialHasher, ObjectPostProcessor, UserLookupService, UserRecord,
};
pub use config::{SecurityBuilder, SecurityConfiguration, SecurityCustomizer};
pub use registry::{
    AnyObject, FactoryOptions, ObjectFactory, ObjectRegistry, ObjectRegistryExt, RegistrationSpec,
    Scope,
};

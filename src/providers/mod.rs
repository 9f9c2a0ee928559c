//! Default and null implementations for the crate's ports

pub mod builder;
pub mod null;

pub use builder::{StandardSecurityBuilder, StandardSecurityConfiguration};
pub use null::{
    InMemoryUserLookup, NoOpPostProcessor, NullAuthenticationManager, PlainCredentialHasher,
};

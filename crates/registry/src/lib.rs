//! Tag-to-implementation registries.
//!
//! A closed enumeration of kinds ([`Kind`], declared with [`kind_enum!`]) is paired
//! with a [`KindRegistry`] that maps each tag to the implementation bound to it.
//! Implementations are bound by [`Registrar`]s during startup and resolve their
//! own tag through [`TypeMixin::kind`].
//!
//! # Axes
//!
//! Every registry carries two independent maps. The [`Axis::Primary`] map holds
//! the main implementation of a tag; the [`Axis::Subcatalog`] map holds an
//! alternate implementation describing the same tag along a second
//! classification dimension. Binding on one axis never affects the other.
//!
//! # Ownership
//!
//! Registries are ordinary values. Callers own a [`KindRegistry`] directly or
//! keep one per enumeration inside a [`Registries`] context; there is no global
//! state and no registration happens implicitly.
//!
//! # Duplicates
//!
//! Binding a different implementation to an occupied tag is resolved by the
//! registry's [`DuplicatePolicy`] (last write wins unless configured otherwise)
//! and recorded as a [`Collision`].

pub mod collision;
pub mod config;
pub mod context;
pub mod descriptor;
pub mod error;
pub mod kind;
pub mod mixin;
pub mod registrar;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use collision::{Collision, DuplicatePolicy, InsertAction, Resolution};
pub use config::{EnumConfig, RegistryConfig};
pub use context::Registries;
pub use descriptor::{ClassDescriptor, Descriptor, Factory};
pub use error::{ConfigError, RegistryError, UnknownKind};
pub use kind::Kind;
pub use mixin::TypeMixin;
pub use registrar::Registrar;
pub use registry::{Axis, KindRegistry, class_for};

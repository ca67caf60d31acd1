//! Error types for registration and lookup.

use std::path::PathBuf;

use crate::registry::Axis;

/// Registration and lookup failures.
///
/// Tags are carried by their canonical names so the error stays independent of
/// the enumeration type that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// A lookup asked for a tag that was never bound on that axis.
	#[error("{enum_name}::{tag} has no {axis} binding")]
	Unregistered { enum_name: &'static str, tag: &'static str, axis: Axis },

	/// An implementation type asked for its tag without having been registered.
	#[error("{type_name} was never bound to a {enum_name} tag")]
	UnboundType { enum_name: &'static str, type_name: &'static str },

	/// A second, different implementation was offered for an occupied tag under
	/// [`crate::DuplicatePolicy::Reject`].
	#[error("duplicate {axis} binding for {enum_name}::{tag}: existing={existing} new={incoming}")]
	Duplicate {
		enum_name: &'static str,
		tag: &'static str,
		axis: Axis,
		existing: &'static str,
		incoming: &'static str,
	},

	/// Some tags have no binding on an axis that must be complete.
	#[error("{enum_name} is missing {axis} bindings for: {}", .missing.join(", "))]
	Incomplete { enum_name: &'static str, axis: Axis, missing: Vec<&'static str> },

	/// The binding has no factory to build an instance from.
	#[error("{type_name} cannot be instantiated: no factory registered")]
	NotConstructible { type_name: &'static str },

	/// The binding (or stored registry) holds a different type than requested.
	#[error("type mismatch: expected {expected}, found {found}")]
	TypeMismatch { expected: &'static str, found: &'static str },

	/// No registry exists for the enumeration type in this context.
	#[error("no registry for {enum_name}")]
	MissingRegistry { enum_name: &'static str },
}

/// A name that is not a member of the enumeration it was parsed into.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {enum_name} member: {name:?}")]
pub struct UnknownKind {
	pub enum_name: &'static str,
	pub name: String,
}

impl UnknownKind {
	pub fn new(enum_name: &'static str, name: impl Into<String>) -> Self {
		Self { enum_name, name: name.into() }
	}
}

/// Errors that can occur when loading [`crate::RegistryConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The document is not valid TOML or does not match the schema.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {}: {error}", .path.display())]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

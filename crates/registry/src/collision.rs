//! Duplicate-binding vocabulary.
//!
//! A collision happens when a registrar offers a different implementation for
//! a (tag, axis) pair that is already bound. What happens next is decided by
//! the registry's [`DuplicatePolicy`]; the outcome is recorded as a
//! [`Collision`] for diagnostics.

use core::fmt;

use serde::Deserialize;

use crate::registry::Axis;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
	/// Overwrite with the last implementation seen.
	#[default]
	LastWins,
	/// Keep the first implementation seen for a tag.
	FirstWins,
	/// Fail the registration and leave the registry unchanged.
	Reject,
}

impl fmt::Display for DuplicatePolicy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::LastWins => write!(f, "last-wins"),
			Self::FirstWins => write!(f, "first-wins"),
			Self::Reject => write!(f, "reject"),
		}
	}
}

/// Result of a successful registration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Tag was unbound; implementation inserted.
	InsertedNew,
	/// Tag was bound; kept the existing implementation.
	KeptExisting,
	/// Tag was bound; replaced with the new implementation.
	ReplacedExisting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
	/// Existing binding kept; incoming dropped.
	KeptExisting,
	/// Existing binding replaced by incoming.
	ReplacedExisting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision<K> {
	pub enum_name: &'static str,
	pub axis: Axis,
	pub tag: K,
	/// Type name of the implementation bound before the conflict.
	pub existing: &'static str,
	/// Type name of the implementation offered by the conflicting registrar.
	pub incoming: &'static str,
	pub resolution: Resolution,
}

impl<K: fmt::Display> fmt::Display for Collision<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let verb = match self.resolution {
			Resolution::KeptExisting => "kept over",
			Resolution::ReplacedExisting => "replaced by",
		};
		write!(f, "{}::{} ({}): {} {} {}", self.enum_name, self.tag, self.axis, self.existing, verb, self.incoming)
	}
}

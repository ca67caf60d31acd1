//! Per-enumeration registry.
//!
//! # Mental Model
//!
//! A [`KindRegistry`] belongs to exactly one enumeration type `K` and owns two
//! independent maps from tag to descriptor, one per [`Axis`]. Both maps start
//! empty when the registry is constructed, so no enumeration type can observe
//! another's bindings: isolation is a property of the type, not of
//! bookkeeping.
//!
//! Registrars write into a registry during startup; afterwards lookups are
//! plain hash-map reads. The registry also keeps the reverse direction, from an
//! implementation's `TypeId` back to its tag, which is what
//! [`crate::TypeMixin::kind`] reads.
//!
//! # Invariants
//!
//! - Writing to one axis never changes the other axis.
//! - A rejected registration leaves both maps and the reverse map untouched.
//! - Re-registering the descriptor already bound to a (tag, axis) leaves the maps
//!   unchanged but re-stamps the type with that tag.

use core::any::{Any, TypeId};
use core::fmt;
use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap as HashMap;
use serde::Deserialize;

use crate::collision::{Collision, DuplicatePolicy, InsertAction, Resolution};
use crate::config::RegistryConfig;
use crate::descriptor::{ClassDescriptor, Descriptor};
use crate::error::RegistryError;
use crate::kind::Kind;

/// Classification dimension a binding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Axis {
	/// The main implementation of a tag.
	Primary,
	/// The alternate implementation describing a tag's catalog entry.
	Subcatalog,
}

impl fmt::Display for Axis {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Primary => write!(f, "primary"),
			Self::Subcatalog => write!(f, "subcatalog"),
		}
	}
}

/// Tag-to-implementation bindings for one enumeration type.
pub struct KindRegistry<K: Kind, D: Descriptor = ClassDescriptor> {
	primary: HashMap<K, D>,
	subcatalog: HashMap<K, D>,
	stamps: HashMap<TypeId, K>,
	policy: DuplicatePolicy,
	collisions: Vec<Collision<K>>,
}

impl<K: Kind, D: Descriptor> KindRegistry<K, D> {
	/// Creates an empty registry with the default duplicate policy.
	pub fn new() -> Self {
		Self::with_policy(DuplicatePolicy::default())
	}

	/// Creates an empty registry with the given duplicate policy.
	pub fn with_policy(policy: DuplicatePolicy) -> Self {
		Self {
			primary: HashMap::default(),
			subcatalog: HashMap::default(),
			stamps: HashMap::default(),
			policy,
			collisions: Vec::new(),
		}
	}

	/// Creates an empty registry using the policy configured for `K`.
	pub fn with_config(config: &RegistryConfig) -> Self {
		Self::with_policy(config.policy_for(K::ENUM_NAME))
	}

	pub fn policy(&self) -> DuplicatePolicy {
		self.policy
	}

	/// Binds `descriptor` to `tag` on `axis` and stamps the described type with `tag`.
	pub fn register(&mut self, axis: Axis, tag: K, descriptor: D) -> Result<InsertAction, RegistryError> {
		let table = match axis {
			Axis::Primary => &mut self.primary,
			Axis::Subcatalog => &mut self.subcatalog,
		};

		let action = match table.entry(tag) {
			Entry::Vacant(slot) => {
				tracing::debug!(enum_name = K::ENUM_NAME, %axis, %tag, class = descriptor.type_name(), "bound");
				slot.insert(descriptor.clone());
				InsertAction::InsertedNew
			}
			Entry::Occupied(slot) if slot.get().class_id() == descriptor.class_id() => {
				tracing::debug!(enum_name = K::ENUM_NAME, %axis, %tag, class = descriptor.type_name(), "already bound");
				self.stamps.insert(descriptor.class_id(), tag);
				return Ok(InsertAction::KeptExisting);
			}
			Entry::Occupied(mut slot) => {
				let existing = slot.get().type_name();
				let incoming = descriptor.type_name();
				let resolution = match self.policy {
					DuplicatePolicy::Reject => {
						tracing::warn!(enum_name = K::ENUM_NAME, %axis, %tag, existing, incoming, "duplicate binding rejected");
						return Err(RegistryError::Duplicate {
							enum_name: K::ENUM_NAME,
							tag: tag.name(),
							axis,
							existing,
							incoming,
						});
					}
					DuplicatePolicy::FirstWins => Resolution::KeptExisting,
					DuplicatePolicy::LastWins => Resolution::ReplacedExisting,
				};

				let collision = Collision {
					enum_name: K::ENUM_NAME,
					axis,
					tag,
					existing,
					incoming,
					resolution,
				};
				tracing::warn!(policy = %self.policy, "duplicate binding: {collision}");
				self.collisions.push(collision);

				match resolution {
					Resolution::KeptExisting => return Ok(InsertAction::KeptExisting),
					Resolution::ReplacedExisting => {
						slot.insert(descriptor.clone());
						InsertAction::ReplacedExisting
					}
				}
			}
		};

		self.stamps.insert(descriptor.class_id(), tag);
		Ok(action)
	}

	/// Returns the primary binding for `tag`.
	pub fn type_of(&self, tag: K) -> Result<&D, RegistryError> {
		self.lookup(Axis::Primary, tag)
	}

	/// Returns the subcatalog binding for `tag`.
	pub fn subcatalog_type_of(&self, tag: K) -> Result<&D, RegistryError> {
		self.lookup(Axis::Subcatalog, tag)
	}

	/// Returns the binding for `tag` on `axis`, failing if there is none.
	pub fn lookup(&self, axis: Axis, tag: K) -> Result<&D, RegistryError> {
		self.get(axis, tag).ok_or(RegistryError::Unregistered {
			enum_name: K::ENUM_NAME,
			tag: tag.name(),
			axis,
		})
	}

	#[inline]
	pub fn get(&self, axis: Axis, tag: K) -> Option<&D> {
		self.table(axis).get(&tag)
	}

	#[inline]
	pub fn contains(&self, axis: Axis, tag: K) -> bool {
		self.table(axis).contains_key(&tag)
	}

	/// Returns the tag `T` was last registered under, on either axis.
	pub fn kind_of<T: Any>(&self) -> Result<K, RegistryError> {
		self.stamps.get(&TypeId::of::<T>()).copied().ok_or(RegistryError::UnboundType {
			enum_name: K::ENUM_NAME,
			type_name: core::any::type_name::<T>(),
		})
	}

	/// Type-erased form of [`Self::kind_of`] for trait objects.
	pub fn kind_of_value(&self, value: &dyn Any) -> Result<K, RegistryError> {
		self.stamps.get(&value.type_id()).copied().ok_or(RegistryError::UnboundType {
			enum_name: K::ENUM_NAME,
			type_name: "<dyn Any>",
		})
	}

	/// Iterates bindings on `axis` in declaration order of `K`.
	pub fn iter(&self, axis: Axis) -> impl Iterator<Item = (K, &D)> + '_ {
		let table = self.table(axis);
		K::ALL.iter().filter_map(move |&tag| table.get(&tag).map(|d| (tag, d)))
	}

	#[inline]
	pub fn len(&self, axis: Axis) -> usize {
		self.table(axis).len()
	}

	#[inline]
	pub fn is_empty(&self, axis: Axis) -> bool {
		self.table(axis).is_empty()
	}

	/// Returns the tags without a binding on `axis`, in declaration order.
	pub fn unbound(&self, axis: Axis) -> Vec<K> {
		let table = self.table(axis);
		K::ALL.iter().copied().filter(|tag| !table.contains_key(tag)).collect()
	}

	/// Fails unless every tag of `K` is bound on `axis`.
	pub fn ensure_complete(&self, axis: Axis) -> Result<(), RegistryError> {
		let missing = self.unbound(axis);
		if missing.is_empty() {
			return Ok(());
		}
		Err(RegistryError::Incomplete {
			enum_name: K::ENUM_NAME,
			axis,
			missing: missing.into_iter().map(Kind::name).collect(),
		})
	}

	/// Checks the completeness requirements `config` sets for `K`.
	pub fn verify(&self, config: &RegistryConfig) -> Result<(), RegistryError> {
		config.required_axes(K::ENUM_NAME).iter().try_for_each(|&axis| self.ensure_complete(axis))
	}

	/// Returns recorded collisions for diagnostics.
	#[inline]
	pub fn collisions(&self) -> &[Collision<K>] {
		&self.collisions
	}

	fn table(&self, axis: Axis) -> &HashMap<K, D> {
		match axis {
			Axis::Primary => &self.primary,
			Axis::Subcatalog => &self.subcatalog,
		}
	}
}

impl<K: Kind> KindRegistry<K, ClassDescriptor> {
	/// Builds a fresh instance of the type bound to `tag` on `axis`.
	pub fn instantiate(&self, axis: Axis, tag: K) -> Result<Box<dyn Any + Send + Sync>, RegistryError> {
		let class = self.lookup(axis, tag)?;
		class.instantiate().ok_or(RegistryError::NotConstructible {
			type_name: class.type_name(),
		})
	}

	/// Builds a fresh instance of the type bound to `tag` on `axis` as `T`.
	pub fn instantiate_as<T: Any>(&self, axis: Axis, tag: K) -> Result<T, RegistryError> {
		let class = self.lookup(axis, tag)?;
		if !class.is::<T>() {
			return Err(RegistryError::TypeMismatch {
				expected: core::any::type_name::<T>(),
				found: class.type_name(),
			});
		}
		let instance = self.instantiate(axis, tag)?;
		instance.downcast::<T>().map(|boxed| *boxed).map_err(|_| RegistryError::TypeMismatch {
			expected: core::any::type_name::<T>(),
			found: class.type_name(),
		})
	}
}

impl<K: Kind, D: Descriptor> Default for KindRegistry<K, D> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K: Kind, D: Descriptor + fmt::Debug> fmt::Debug for KindRegistry<K, D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("KindRegistry")
			.field("enum_name", &K::ENUM_NAME)
			.field("policy", &self.policy)
			.field("primary", &self.iter(Axis::Primary).collect::<Vec<_>>())
			.field("subcatalog", &self.iter(Axis::Subcatalog).collect::<Vec<_>>())
			.field("collisions", &self.collisions.len())
			.finish()
	}
}

/// Resolves `tag` to its primary binding in `registry`.
pub fn class_for<K: Kind, D: Descriptor>(tag: K, registry: &KindRegistry<K, D>) -> Result<&D, RegistryError> {
	registry.type_of(tag)
}

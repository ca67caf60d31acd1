//! Application-owned set of registries.
//!
//! [`Registries`] holds one [`KindRegistry`] per enumeration type and creates a
//! fresh, empty one the first time an enumeration is touched. Startup routines
//! receive `&mut Registries`, bind their implementations, and the finished
//! context is then passed by shared reference to whatever performs lookups.

use core::any::{Any, TypeId};

use rustc_hash::FxHashMap as HashMap;

use crate::collision::InsertAction;
use crate::config::RegistryConfig;
use crate::descriptor::Descriptor;
use crate::error::RegistryError;
use crate::kind::Kind;
use crate::registry::{Axis, KindRegistry};

type VerifyFn = fn(&dyn Any, &RegistryConfig) -> Result<(), RegistryError>;

struct Slot {
	registry: Box<dyn Any + Send + Sync>,
	/// Type name of the concrete `KindRegistry<K, D>` held in `registry`.
	type_name: &'static str,
	enum_name: &'static str,
	verify: VerifyFn,
}

#[derive(Default)]
pub struct Registries {
	config: RegistryConfig,
	slots: HashMap<TypeId, Slot>,
}

impl Registries {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty context whose registries follow `config`.
	pub fn with_config(config: RegistryConfig) -> Self {
		Self {
			config,
			slots: HashMap::default(),
		}
	}

	pub fn config(&self) -> &RegistryConfig {
		&self.config
	}

	/// Returns the registry for `K`, if one was created.
	pub fn registry<K: Kind, D: Descriptor>(&self) -> Option<&KindRegistry<K, D>> {
		self.slots.get(&TypeId::of::<K>())?.registry.downcast_ref()
	}

	/// Returns the registry for `K`, creating an empty one on first use.
	///
	/// An enumeration has exactly one registry per context; asking for it with a
	/// different descriptor type than it was created with fails.
	pub fn registry_mut<K: Kind, D: Descriptor>(&mut self) -> Result<&mut KindRegistry<K, D>, RegistryError> {
		let config = &self.config;
		let slot = self.slots.entry(TypeId::of::<K>()).or_insert_with(|| {
			tracing::debug!(enum_name = K::ENUM_NAME, policy = %config.policy_for(K::ENUM_NAME), "created registry");
			Slot {
				registry: Box::new(KindRegistry::<K, D>::with_config(config)),
				type_name: core::any::type_name::<KindRegistry<K, D>>(),
				enum_name: K::ENUM_NAME,
				verify: verify_slot::<K, D>,
			}
		});
		let found = slot.type_name;
		slot.registry.downcast_mut().ok_or(RegistryError::TypeMismatch {
			expected: core::any::type_name::<KindRegistry<K, D>>(),
			found,
		})
	}

	/// Binds `descriptor` to `tag` on `axis` in the registry for `K`.
	pub fn register<K: Kind, D: Descriptor>(&mut self, axis: Axis, tag: K, descriptor: D) -> Result<InsertAction, RegistryError> {
		self.registry_mut::<K, D>()?.register(axis, tag, descriptor)
	}

	/// Returns the primary binding for `tag`.
	pub fn type_of<K: Kind, D: Descriptor>(&self, tag: K) -> Result<&D, RegistryError> {
		self.existing::<K, D>()?.type_of(tag)
	}

	/// Returns the subcatalog binding for `tag`.
	pub fn subcatalog_type_of<K: Kind, D: Descriptor>(&self, tag: K) -> Result<&D, RegistryError> {
		self.existing::<K, D>()?.subcatalog_type_of(tag)
	}

	/// Checks every registry against the configured completeness requirements.
	pub fn verify(&self) -> Result<(), RegistryError> {
		let mut slots: Vec<&Slot> = self.slots.values().collect();
		slots.sort_by_key(|slot| slot.enum_name);
		slots.into_iter().try_for_each(|slot| (slot.verify)(slot.registry.as_ref(), &self.config))
	}

	/// Names of the enumerations that own a registry, sorted.
	pub fn enum_names(&self) -> Vec<&'static str> {
		let mut names: Vec<_> = self.slots.values().map(|slot| slot.enum_name).collect();
		names.sort_unstable();
		names
	}

	pub fn len(&self) -> usize {
		self.slots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	fn existing<K: Kind, D: Descriptor>(&self) -> Result<&KindRegistry<K, D>, RegistryError> {
		let slot = self
			.slots
			.get(&TypeId::of::<K>())
			.ok_or(RegistryError::MissingRegistry { enum_name: K::ENUM_NAME })?;
		slot.registry.downcast_ref().ok_or(RegistryError::TypeMismatch {
			expected: core::any::type_name::<KindRegistry<K, D>>(),
			found: slot.type_name,
		})
	}
}

fn verify_slot<K: Kind, D: Descriptor>(registry: &dyn Any, config: &RegistryConfig) -> Result<(), RegistryError> {
	match registry.downcast_ref::<KindRegistry<K, D>>() {
		Some(registry) => registry.verify(config),
		None => Err(RegistryError::TypeMismatch {
			expected: core::any::type_name::<KindRegistry<K, D>>(),
			found: "<unknown registry>",
		}),
	}
}

impl core::fmt::Debug for Registries {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Registries")
			.field("config", &self.config)
			.field("enums", &self.enum_names())
			.finish()
	}
}

#[cfg(test)]
mod tests;

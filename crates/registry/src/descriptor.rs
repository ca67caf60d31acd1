//! Values that stand for an implementation type inside a registry.

use core::any::{Any, TypeId};
use core::fmt;

/// Factory producing a fresh, type-erased instance.
pub type Factory = fn() -> Box<dyn Any + Send + Sync>;

/// A registry binding target.
///
/// Every descriptor identifies exactly one Rust type; the registry uses that
/// identity to stamp the type with its tag.
pub trait Descriptor: Clone + Send + Sync + 'static {
	/// Identity of the described type.
	fn class_id(&self) -> TypeId;

	/// Name of the described type, for diagnostics.
	fn type_name(&self) -> &'static str;
}

/// Default descriptor: type identity plus an optional factory.
#[derive(Clone, Copy)]
pub struct ClassDescriptor {
	class_id: TypeId,
	type_name: &'static str,
	factory: Option<Factory>,
}

impl ClassDescriptor {
	/// Describes `T` without a way to construct it.
	pub fn of<T: Any>() -> Self {
		Self {
			class_id: TypeId::of::<T>(),
			type_name: core::any::type_name::<T>(),
			factory: None,
		}
	}

	/// Describes `T` with a factory that builds `T::default()`.
	pub fn constructible<T: Any + Default + Send + Sync>() -> Self {
		Self {
			factory: Some(construct::<T> as Factory),
			..Self::of::<T>()
		}
	}

	/// Returns true if this describes `T`.
	pub fn is<T: Any>(&self) -> bool {
		self.class_id == TypeId::of::<T>()
	}

	/// Returns true if a factory is attached.
	pub fn is_constructible(&self) -> bool {
		self.factory.is_some()
	}

	/// Runs the factory, if any.
	pub fn instantiate(&self) -> Option<Box<dyn Any + Send + Sync>> {
		self.factory.map(|f| f())
	}
}

fn construct<T: Any + Default + Send + Sync>() -> Box<dyn Any + Send + Sync> {
	Box::new(T::default())
}

impl Descriptor for ClassDescriptor {
	fn class_id(&self) -> TypeId {
		self.class_id
	}

	fn type_name(&self) -> &'static str {
		self.type_name
	}
}

impl PartialEq for ClassDescriptor {
	fn eq(&self, other: &Self) -> bool {
		self.class_id == other.class_id
	}
}

impl Eq for ClassDescriptor {}

impl fmt::Debug for ClassDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ClassDescriptor")
			.field("type_name", &self.type_name)
			.field("constructible", &self.factory.is_some())
			.finish()
	}
}

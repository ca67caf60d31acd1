//! Binding implementations to tags.

use core::any::Any;

use crate::descriptor::{ClassDescriptor, Descriptor};
use crate::error::RegistryError;
use crate::kind::Kind;
use crate::registry::{Axis, KindRegistry};

/// Binds one implementation to one tag on one axis.
///
/// A registrar is configured once with its tag and then applied to a single
/// descriptor during startup:
///
/// ```
/// use kindreg_registry::{KindRegistry, Registrar, TypeMixin, kind_enum};
///
/// kind_enum! {
/// 	pub enum Shape {
/// 		Circle => "CIRCLE",
/// 		Square => "SQUARE",
/// 	}
/// }
///
/// #[derive(Default)]
/// struct CircleImpl;
///
/// impl TypeMixin for CircleImpl {
/// 	type Kind = Shape;
/// }
///
/// let mut registry: KindRegistry<Shape> = KindRegistry::new();
/// Registrar::new(Shape::Circle).bind::<CircleImpl>(&mut registry)?;
///
/// assert!(registry.type_of(Shape::Circle)?.is::<CircleImpl>());
/// assert_eq!(CircleImpl.kind(&registry)?, Shape::Circle);
/// # Ok::<(), kindreg_registry::RegistryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registrar<K: Kind> {
	tag: K,
	axis: Axis,
}

impl<K: Kind> Registrar<K> {
	/// Creates a registrar writing into the primary axis.
	pub const fn new(tag: K) -> Self {
		Self { tag, axis: Axis::Primary }
	}

	/// Creates a registrar writing into the subcatalog axis.
	pub const fn subcatalog(tag: K) -> Self {
		Self { tag, axis: Axis::Subcatalog }
	}

	pub fn tag(&self) -> K {
		self.tag
	}

	pub fn axis(&self) -> Axis {
		self.axis
	}

	/// Binds `class` into `registry` and hands it back unchanged.
	pub fn apply<D: Descriptor>(&self, registry: &mut KindRegistry<K, D>, class: D) -> Result<D, RegistryError> {
		registry.register(self.axis, self.tag, class.clone())?;
		Ok(class)
	}

	/// Binds `T`, described without a factory.
	pub fn bind<T: Any>(&self, registry: &mut KindRegistry<K, ClassDescriptor>) -> Result<ClassDescriptor, RegistryError> {
		self.apply(registry, ClassDescriptor::of::<T>())
	}
}

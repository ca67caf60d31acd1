//! Type-erased label records and the descriptor that loads them.

use core::any::{Any, TypeId};
use core::fmt;

use kindreg_registry::{ClassDescriptor, Descriptor, KindRegistry, RegistryError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::kind::LabelKind;

/// A label or subcatalog record held behind a trait object.
pub trait Annotation: Any + fmt::Debug + Send + Sync {
	fn as_any(&self) -> &dyn Any;

	/// Serializes the record into its JSON form.
	fn dumps(&self) -> Result<Value, serde_json::Error>;
}

impl<T> Annotation for T
where
	T: Serialize + fmt::Debug + Send + Sync + 'static,
{
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn dumps(&self) -> Result<Value, serde_json::Error> {
		serde_json::to_value(self)
	}
}

/// Builds a record of a concrete type from its JSON form.
pub type Loads = fn(Value) -> Result<Box<dyn Annotation>, serde_json::Error>;

/// Registry descriptor for label and subcatalog types.
#[derive(Clone, Copy)]
pub struct LabelClass {
	class: ClassDescriptor,
	loads: Loads,
}

impl LabelClass {
	pub fn of<T: Annotation + DeserializeOwned + Default>() -> Self {
		Self {
			class: ClassDescriptor::constructible::<T>(),
			loads: loads::<T> as Loads,
		}
	}

	pub fn class(&self) -> &ClassDescriptor {
		&self.class
	}

	/// Deserializes `contents` as the described type.
	pub fn loads(&self, contents: Value) -> Result<Box<dyn Annotation>, serde_json::Error> {
		(self.loads)(contents)
	}
}

fn loads<T: Annotation + DeserializeOwned>(contents: Value) -> Result<Box<dyn Annotation>, serde_json::Error> {
	Ok(Box::new(serde_json::from_value::<T>(contents)?))
}

impl Descriptor for LabelClass {
	fn class_id(&self) -> TypeId {
		self.class.class_id()
	}

	fn type_name(&self) -> &'static str {
		self.class.type_name()
	}
}

impl fmt::Debug for LabelClass {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("LabelClass").field(&self.class.type_name()).finish()
	}
}

/// Returns the kind `record`'s concrete type was registered under.
pub fn annotation_kind(registry: &KindRegistry<LabelKind, LabelClass>, record: &dyn Annotation) -> Result<LabelKind, RegistryError> {
	registry.kind_of_value(record.as_any())
}

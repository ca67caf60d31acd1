use core::any::Any;

use crate::descriptor::Descriptor;
use crate::error::RegistryError;
use crate::kind::Kind;
use crate::registry::KindRegistry;

/// Base for implementation types that report the tag they were registered under.
///
/// The associated [`TypeMixin::Kind`] pins the enumeration at compile time, so
/// `kind()` can only be asked of a registry over that enumeration.
pub trait TypeMixin: Any {
	type Kind: Kind;

	/// Returns the tag this type was bound to in `registry`.
	///
	/// Fails with [`RegistryError::UnboundType`] when no registrar ever bound
	/// this type there.
	fn kind<D: Descriptor>(&self, registry: &KindRegistry<Self::Kind, D>) -> Result<Self::Kind, RegistryError>
	where
		Self: Sized,
	{
		registry.kind_of::<Self>()
	}
}

//! Startup registration of the builtin label types.

use kindreg_registry::{Axis, KindRegistry, Registrar, Registries, RegistryConfig, RegistryError};

use crate::annotation::LabelClass;
use crate::kind::LabelKind;
use crate::label::{Box2D, Classification, Keypoints2D, Sentence};
use crate::subcatalog::{Box2DSubcatalog, ClassificationSubcatalog, Keypoints2DSubcatalog, SentenceSubcatalog};

/// Registry over label kinds.
pub type LabelRegistry = KindRegistry<LabelKind, LabelClass>;

/// Binds every builtin label and subcatalog type to its kind.
pub fn register_builtins(registry: &mut LabelRegistry) -> Result<(), RegistryError> {
	let builtins = [
		(LabelKind::Classification, LabelClass::of::<Classification>(), LabelClass::of::<ClassificationSubcatalog>()),
		(LabelKind::Box2D, LabelClass::of::<Box2D>(), LabelClass::of::<Box2DSubcatalog>()),
		(LabelKind::Keypoints2D, LabelClass::of::<Keypoints2D>(), LabelClass::of::<Keypoints2DSubcatalog>()),
		(LabelKind::Sentence, LabelClass::of::<Sentence>(), LabelClass::of::<SentenceSubcatalog>()),
	];

	for (kind, label, subcatalog) in builtins {
		Registrar::new(kind).apply(registry, label)?;
		Registrar::subcatalog(kind).apply(registry, subcatalog)?;
	}

	tracing::debug!(
		labels = registry.len(Axis::Primary),
		subcatalogs = registry.len(Axis::Subcatalog),
		"registered builtin label types"
	);
	Ok(())
}

/// Builds a label registry with the builtins bound and `config` enforced.
pub fn label_registry(config: &RegistryConfig) -> Result<LabelRegistry, RegistryError> {
	let mut registry = LabelRegistry::with_config(config);
	register_builtins(&mut registry)?;
	registry.verify(config)?;
	Ok(registry)
}

/// Registers the builtins into the label registry of an application context.
pub fn install(registries: &mut Registries) -> Result<(), RegistryError> {
	let config = registries.config().clone();
	let registry = registries.registry_mut::<LabelKind, LabelClass>()?;
	register_builtins(registry)?;
	registry.verify(&config)
}

use kindreg_labels::{
	Box2D, Box2DSubcatalog, Classification, ClassificationSubcatalog, Keypoints2D, LabelClass, LabelKind, LabelRegistry, Sentence,
	SentenceSubcatalog, annotation_kind, install, label_registry, load_label, register_builtins,
};
use kindreg_registry::{Axis, DuplicatePolicy, Kind, Registrar, Registries, RegistryConfig, RegistryError, TypeMixin};
use pretty_assertions::assert_eq;
use serde_json::json;
use serde as _;
use thiserror as _;
use tracing as _;

#[test]
fn every_kind_is_bound_on_both_axes() {
	let registry = label_registry(&RegistryConfig::default()).unwrap();

	for &kind in LabelKind::ALL {
		assert!(registry.contains(Axis::Primary, kind), "{kind} has no label type");
		assert!(registry.contains(Axis::Subcatalog, kind), "{kind} has no subcatalog type");
	}
	assert!(registry.collisions().is_empty());
}

#[test]
fn records_report_their_kind() {
	let registry = label_registry(&RegistryConfig::default()).unwrap();

	assert_eq!(Classification::default().kind(&registry), Ok(LabelKind::Classification));
	assert_eq!(Box2D::default().kind(&registry), Ok(LabelKind::Box2D));
	assert_eq!(Keypoints2D::default().kind(&registry), Ok(LabelKind::Keypoints2D));
	assert_eq!(SentenceSubcatalog::default().kind(&registry), Ok(LabelKind::Sentence));
	assert_eq!(ClassificationSubcatalog::default().kind(&registry), Ok(LabelKind::Classification));
}

#[test]
fn loaded_trait_objects_report_their_kind() {
	let registry = label_registry(&RegistryConfig::default()).unwrap();
	let record = load_label(&registry, LabelKind::Sentence, json!({ "sentence": [] })).unwrap();

	assert_eq!(annotation_kind(&registry, record.as_ref()), Ok(LabelKind::Sentence));
	assert!(record.as_any().is::<Sentence>());
}

#[test]
fn kind_fails_before_registration() {
	let registry = LabelRegistry::new();
	let err = Box2D::default().kind(&registry).unwrap_err();
	assert!(matches!(err, RegistryError::UnboundType { enum_name: "LabelKind", .. }), "got {err:?}");
}

#[test]
fn registry_instantiates_default_records() {
	let registry = label_registry(&RegistryConfig::default()).unwrap();
	let class = registry.subcatalog_type_of(LabelKind::Box2D).unwrap();

	let instance = class.class().instantiate().unwrap();
	assert_eq!(instance.downcast_ref::<Box2DSubcatalog>(), Some(&Box2DSubcatalog::default()));
}

#[test]
fn strict_config_rejects_conflicting_builtin_override() {
	let config = RegistryConfig::from_toml_str(
		r#"
[overrides.LabelKind]
duplicate-policy = "reject"
require-complete = ["primary", "subcatalog"]
"#,
	)
	.unwrap();
	let mut registry = label_registry(&config).unwrap();
	assert_eq!(registry.policy(), DuplicatePolicy::Reject);

	let err = Registrar::new(LabelKind::Box2D)
		.apply(&mut registry, LabelClass::of::<Classification>())
		.unwrap_err();
	assert!(matches!(err, RegistryError::Duplicate { tag: "BOX2D", .. }), "got {err:?}");
	assert!(registry.type_of(LabelKind::Box2D).unwrap().class().is::<Box2D>());
}

#[test]
fn default_config_lets_a_later_registrar_override() {
	let mut registry = label_registry(&RegistryConfig::default()).unwrap();
	Registrar::new(LabelKind::Box2D)
		.apply(&mut registry, LabelClass::of::<Classification>())
		.unwrap();

	assert!(registry.type_of(LabelKind::Box2D).unwrap().class().is::<Classification>());
	assert_eq!(registry.collisions().len(), 1);

	let record = load_label(&registry, LabelKind::Box2D, json!({ "category": "car" })).unwrap();
	assert!(record.as_any().is::<Classification>());
}

#[test]
fn builtins_install_into_a_shared_context() {
	let config = RegistryConfig::from_toml_str(r#"require-complete = ["primary", "subcatalog"]"#).unwrap();
	let mut registries = Registries::with_config(config);
	install(&mut registries).unwrap();

	assert_eq!(registries.enum_names(), vec![LabelKind::ENUM_NAME]);
	assert_eq!(registries.verify(), Ok(()));

	let class = registries.type_of::<LabelKind, LabelClass>(LabelKind::Classification).unwrap();
	assert!(class.class().is::<Classification>());
}

#[test]
fn partial_registration_fails_verification() {
	let config = RegistryConfig::from_toml_str(r#"require-complete = ["subcatalog"]"#).unwrap();
	let mut registry = LabelRegistry::with_config(&config);
	Registrar::subcatalog(LabelKind::Box2D)
		.apply(&mut registry, LabelClass::of::<Box2DSubcatalog>())
		.unwrap();

	match registry.verify(&config) {
		Err(RegistryError::Incomplete { missing, .. }) => assert_eq!(missing, vec!["CLASSIFICATION", "KEYPOINTS2D", "SENTENCE"]),
		other => panic!("expected incomplete registry, got {other:?}"),
	}

	register_builtins(&mut registry).unwrap();
	assert_eq!(registry.verify(&config), Ok(()));
}

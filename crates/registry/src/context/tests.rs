use pretty_assertions::assert_eq;

use super::*;
use crate::collision::DuplicatePolicy;
use crate::descriptor::ClassDescriptor;
use crate::test_fixtures::{CircleImpl, Color, RedImpl, Shape, SquareImpl};
use crate::{Registrar, TypeMixin};

/// Label-like descriptor used to check the one-descriptor-per-enum rule.
#[derive(Debug, Clone, PartialEq)]
struct Tagline(&'static str);

impl Descriptor for Tagline {
	fn class_id(&self) -> TypeId {
		TypeId::of::<Self>()
	}

	fn type_name(&self) -> &'static str {
		self.0
	}
}

#[test]
fn each_enumeration_gets_a_fresh_registry() {
	let mut registries = Registries::new();
	registries
		.register(Axis::Primary, Shape::Circle, ClassDescriptor::of::<CircleImpl>())
		.unwrap();
	registries.register(Axis::Primary, Color::Red, ClassDescriptor::of::<RedImpl>()).unwrap();

	assert_eq!(registries.len(), 2);
	assert_eq!(registries.enum_names(), vec!["Color", "Shape"]);

	let colors = registries.registry::<Color, ClassDescriptor>().unwrap();
	assert!(colors.type_of(Color::Circle).is_err());
	assert_eq!(colors.len(Axis::Primary), 1);

	let shapes = registries.registry::<Shape, ClassDescriptor>().unwrap();
	assert!(shapes.type_of(Shape::Circle).unwrap().is::<CircleImpl>());
	assert_eq!(CircleImpl::default().kind(shapes), Ok(Shape::Circle));
}

#[test]
fn registrars_apply_through_the_context() {
	let mut registries = Registries::new();
	let shapes = registries.registry_mut::<Shape, ClassDescriptor>().unwrap();
	Registrar::new(Shape::Square).bind::<SquareImpl>(shapes).unwrap();
	Registrar::subcatalog(Shape::Square).bind::<CircleImpl>(shapes).unwrap();

	let primary = registries.type_of::<Shape, ClassDescriptor>(Shape::Square).unwrap();
	let subcatalog = registries.subcatalog_type_of::<Shape, ClassDescriptor>(Shape::Square).unwrap();
	assert!(primary.is::<SquareImpl>());
	assert!(subcatalog.is::<CircleImpl>());
}

#[test]
fn lookup_without_registry_fails() {
	let registries = Registries::new();
	assert_eq!(
		registries.type_of::<Shape, ClassDescriptor>(Shape::Circle),
		Err(RegistryError::MissingRegistry { enum_name: "Shape" })
	);
	assert!(registries.registry::<Shape, ClassDescriptor>().is_none());
}

#[test]
fn second_descriptor_type_is_refused() {
	let mut registries = Registries::new();
	registries
		.register(Axis::Primary, Shape::Circle, ClassDescriptor::of::<CircleImpl>())
		.unwrap();

	let err = registries
		.register(Axis::Primary, Shape::Square, Tagline("square"))
		.unwrap_err();
	assert!(matches!(err, RegistryError::TypeMismatch { .. }), "got {err:?}");
	assert!(registries.registry::<Shape, Tagline>().is_none());
	assert!(registries.type_of::<Shape, Tagline>(Shape::Circle).is_err());
}

#[test]
fn new_registries_take_policy_from_config() {
	let config = RegistryConfig::from_toml_str(
		r#"
[overrides.Shape]
duplicate-policy = "reject"
"#,
	)
	.unwrap();
	let mut registries = Registries::with_config(config);

	let shapes = registries.registry_mut::<Shape, ClassDescriptor>().unwrap();
	assert_eq!(shapes.policy(), DuplicatePolicy::Reject);
	let colors = registries.registry_mut::<Color, ClassDescriptor>().unwrap();
	assert_eq!(colors.policy(), DuplicatePolicy::LastWins);
}

#[test]
fn verify_checks_every_registry() {
	let config = RegistryConfig::from_toml_str(r#"require-complete = ["primary"]"#).unwrap();
	let mut registries = Registries::with_config(config);

	for &shape in Shape::ALL {
		registries.register(Axis::Primary, shape, Tagline("shape")).unwrap();
	}
	assert_eq!(registries.verify(), Ok(()));

	registries.register(Axis::Primary, Color::Red, Tagline("red")).unwrap();
	match registries.verify() {
		Err(RegistryError::Incomplete { enum_name, axis, missing }) => {
			assert_eq!(enum_name, "Color");
			assert_eq!(axis, Axis::Primary);
			assert_eq!(missing, vec!["CIRCLE"]);
		}
		other => panic!("expected incomplete Color registry, got {other:?}"),
	}
}

use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_document_yields_defaults() {
	let config = RegistryConfig::from_toml_str("").unwrap();
	assert_eq!(config, RegistryConfig::default());
	assert_eq!(config.policy_for("Shape"), DuplicatePolicy::LastWins);
	assert!(config.required_axes("Shape").is_empty());
}

#[test]
fn overrides_fall_back_per_field() {
	let config = RegistryConfig::from_toml_str(
		r#"
duplicate-policy = "first-wins"
require-complete = ["primary"]

[overrides.Shape]
duplicate-policy = "reject"

[overrides.Color]
require-complete = ["primary", "subcatalog"]
"#,
	)
	.unwrap();

	assert_eq!(config.policy_for("Shape"), DuplicatePolicy::Reject);
	assert_eq!(config.required_axes("Shape"), &[Axis::Primary]);

	assert_eq!(config.policy_for("Color"), DuplicatePolicy::FirstWins);
	assert_eq!(config.required_axes("Color"), &[Axis::Primary, Axis::Subcatalog]);

	assert_eq!(config.policy_for("Unlisted"), DuplicatePolicy::FirstWins);
}

#[test]
fn unknown_policy_is_rejected() {
	let err = RegistryConfig::from_toml_str(r#"duplicate-policy = "panic""#).unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)), "got {err:?}");
}

#[test]
fn unknown_field_is_rejected() {
	assert!(RegistryConfig::from_toml_str("strict = true").is_err());
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, r#"duplicate-policy = "reject""#).unwrap();

	let config = RegistryConfig::load(file.path()).unwrap();
	assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
}

#[test]
fn load_reports_missing_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("registry.toml");

	match RegistryConfig::load(&path) {
		Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
		other => panic!("expected I/O error, got {other:?}"),
	}
}

//! Registry configuration.
//!
//! Configuration is written in TOML and controls how registries react to
//! duplicate bindings and which axes must be fully bound once startup
//! registration has finished:
//!
//! ```toml
//! duplicate-policy = "last-wins"
//! require-complete = ["primary"]
//!
//! [overrides.LabelKind]
//! duplicate-policy = "reject"
//! require-complete = ["primary", "subcatalog"]
//! ```
//!
//! Override tables are keyed by [`crate::Kind::ENUM_NAME`]; any field they omit
//! falls back to the top-level value.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::collision::DuplicatePolicy;
use crate::error::ConfigError;
use crate::registry::Axis;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct RegistryConfig {
	/// Policy applied to every enumeration without an override.
	pub duplicate_policy: DuplicatePolicy,
	/// Axes that must bind every tag of every enumeration without an override.
	pub require_complete: Vec<Axis>,
	/// Per-enumeration settings.
	pub overrides: BTreeMap<String, EnumConfig>,
}

/// Settings for a single enumeration type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct EnumConfig {
	pub duplicate_policy: Option<DuplicatePolicy>,
	pub require_complete: Option<Vec<Axis>>,
}

impl RegistryConfig {
	/// Parses a configuration document.
	pub fn from_toml_str(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}

	/// Reads and parses a configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.display(), overrides = config.overrides.len(), "loaded registry config");
		Ok(config)
	}

	/// Returns the duplicate policy for the named enumeration.
	pub fn policy_for(&self, enum_name: &str) -> DuplicatePolicy {
		self.overrides
			.get(enum_name)
			.and_then(|o| o.duplicate_policy)
			.unwrap_or(self.duplicate_policy)
	}

	/// Returns the axes that must be complete for the named enumeration.
	pub fn required_axes(&self, enum_name: &str) -> &[Axis] {
		self.overrides
			.get(enum_name)
			.and_then(|o| o.require_complete.as_deref())
			.unwrap_or(&self.require_complete)
	}
}

#[cfg(test)]
mod tests;

//! Error types for label loading.

use kindreg_registry::{RegistryError, UnknownKind};

#[derive(Debug, thiserror::Error)]
pub enum LabelError {
	#[error(transparent)]
	Registry(#[from] RegistryError),

	#[error(transparent)]
	UnknownKind(#[from] UnknownKind),

	/// A record did not match the shape its registered type expects.
	#[error("malformed {kind} record: {source}")]
	Malformed {
		kind: &'static str,
		#[source]
		source: serde_json::Error,
	},

	/// A record could not be turned back into JSON.
	#[error("failed to serialize {kind} record: {source}")]
	Serialize {
		kind: &'static str,
		#[source]
		source: serde_json::Error,
	},

	#[error("expected a JSON object keyed by label kind, found {found}")]
	NotAnObject { found: &'static str },
}

/// Result type for label operations.
pub type Result<T> = std::result::Result<T, LabelError>;

//! JSON dispatch through the label registry.
//!
//! Both catalogs and label sets are JSON objects keyed by [`LabelKind`] name.
//! Each value is handed to whatever type the registry binds to that kind on the
//! matching axis, so adding a label type never touches this module.

use std::collections::BTreeMap;

use kindreg_registry::{Axis, Kind};
use serde_json::{Map, Value};

use crate::annotation::Annotation;
use crate::builtins::LabelRegistry;
use crate::error::{LabelError, Result};
use crate::kind::LabelKind;

/// Loads a single label of `kind`.
pub fn load_label(registry: &LabelRegistry, kind: LabelKind, contents: Value) -> Result<Box<dyn Annotation>> {
	load_record(registry, Axis::Primary, kind, contents)
}

/// Loads the subcatalog of `kind`.
pub fn load_subcatalog(registry: &LabelRegistry, kind: LabelKind, contents: Value) -> Result<Box<dyn Annotation>> {
	load_record(registry, Axis::Subcatalog, kind, contents)
}

fn load_record(registry: &LabelRegistry, axis: Axis, kind: LabelKind, contents: Value) -> Result<Box<dyn Annotation>> {
	registry
		.lookup(axis, kind)?
		.loads(contents)
		.map_err(|source| LabelError::Malformed { kind: kind.name(), source })
}

/// Records keyed by kind, all loaded from the same axis.
#[derive(Debug, Default)]
struct Entries(BTreeMap<LabelKind, Box<dyn Annotation>>);

impl Entries {
	fn loads(registry: &LabelRegistry, axis: Axis, contents: Value) -> Result<Self> {
		let object = match contents {
			Value::Object(object) => object,
			other => return Err(LabelError::NotAnObject { found: json_type(&other) }),
		};

		object
			.into_iter()
			.map(|(name, value)| -> Result<(LabelKind, Box<dyn Annotation>)> {
				let kind: LabelKind = name.parse()?;
				Ok((kind, load_record(registry, axis, kind, value)?))
			})
			.collect::<Result<_>>()
			.map(Self)
	}

	fn get(&self, kind: LabelKind) -> Option<&dyn Annotation> {
		self.0.get(&kind).map(|record| &**record)
	}

	fn get_as<T: Annotation>(&self, kind: LabelKind) -> Option<&T> {
		self.get(kind)?.as_any().downcast_ref()
	}

	fn dumps(&self) -> Result<Value> {
		let mut object = Map::with_capacity(self.0.len());
		for (kind, record) in &self.0 {
			let value = record
				.dumps()
				.map_err(|source| LabelError::Serialize { kind: kind.name(), source })?;
			object.insert(kind.name().to_owned(), value);
		}
		Ok(Value::Object(object))
	}
}

fn json_type(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}

/// Per-kind subcatalogs of a dataset catalog.
#[derive(Debug, Default)]
pub struct Catalog {
	subcatalogs: Entries,
}

impl Catalog {
	/// Loads a catalog such as `{"CLASSIFICATION": {...}, "BOX2D": {...}}`.
	pub fn loads(registry: &LabelRegistry, contents: Value) -> Result<Self> {
		let subcatalogs = Entries::loads(registry, Axis::Subcatalog, contents)?;
		tracing::debug!(kinds = subcatalogs.0.len(), "loaded catalog");
		Ok(Self { subcatalogs })
	}

	pub fn get(&self, kind: LabelKind) -> Option<&dyn Annotation> {
		self.subcatalogs.get(kind)
	}

	/// Returns the subcatalog of `kind` if it has concrete type `T`.
	pub fn get_as<T: Annotation>(&self, kind: LabelKind) -> Option<&T> {
		self.subcatalogs.get_as(kind)
	}

	/// Kinds present in this catalog, in declaration order.
	pub fn kinds(&self) -> impl Iterator<Item = LabelKind> + '_ {
		self.subcatalogs.0.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.subcatalogs.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.subcatalogs.0.is_empty()
	}

	pub fn dumps(&self) -> Result<Value> {
		self.subcatalogs.dumps()
	}
}

/// Labels attached to one data sample.
#[derive(Debug, Default)]
pub struct LabelSet {
	labels: Entries,
}

impl LabelSet {
	/// Loads labels such as `{"CLASSIFICATION": {...}, "BOX2D": {...}}`.
	pub fn loads(registry: &LabelRegistry, contents: Value) -> Result<Self> {
		Ok(Self {
			labels: Entries::loads(registry, Axis::Primary, contents)?,
		})
	}

	pub fn get(&self, kind: LabelKind) -> Option<&dyn Annotation> {
		self.labels.get(kind)
	}

	pub fn get_as<T: Annotation>(&self, kind: LabelKind) -> Option<&T> {
		self.labels.get_as(kind)
	}

	pub fn kinds(&self) -> impl Iterator<Item = LabelKind> + '_ {
		self.labels.0.keys().copied()
	}

	pub fn len(&self) -> usize {
		self.labels.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.labels.0.is_empty()
	}

	pub fn dumps(&self) -> Result<Value> {
		self.labels.dumps()
	}
}

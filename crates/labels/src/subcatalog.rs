//! Subcatalog records: the catalog-side description of each [`LabelKind`].

use kindreg_registry::TypeMixin;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kind::LabelKind;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

/// Declared attribute with its allowed values or range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeInfo {
	pub name: String,
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub value_type: Option<Value>,
	#[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
	pub values: Vec<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub minimum: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub maximum: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassificationSubcatalog {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub categories: Vec<CategoryInfo>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub attributes: Vec<AttributeInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Box2DSubcatalog {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub is_tracking: bool,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub categories: Vec<CategoryInfo>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub attributes: Vec<AttributeInfo>,
}

/// Layout of one keypoint group: how many points, their names and skeleton.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeypointsInfo {
	pub number: usize,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub names: Vec<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub skeleton: Vec<[usize; 2]>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub visible: Option<String>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub parent_categories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Keypoints2DSubcatalog {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub is_tracking: bool,
	pub keypoints: Vec<KeypointsInfo>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub categories: Vec<CategoryInfo>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub attributes: Vec<AttributeInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SentenceSubcatalog {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub is_sample: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sample_rate: Option<u32>,
	/// Pronunciation lexicon: each entry is a word followed by its phones.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub lexicon: Vec<Vec<String>>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub attributes: Vec<AttributeInfo>,
}

impl TypeMixin for ClassificationSubcatalog {
	type Kind = LabelKind;
}

impl TypeMixin for Box2DSubcatalog {
	type Kind = LabelKind;
}

impl TypeMixin for Keypoints2DSubcatalog {
	type Kind = LabelKind;
}

impl TypeMixin for SentenceSubcatalog {
	type Kind = LabelKind;
}

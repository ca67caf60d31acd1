//! Label records, one per [`LabelKind`].

use std::collections::BTreeMap;

use kindreg_registry::TypeMixin;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::kind::LabelKind;

/// Free-form attribute values keyed by attribute name.
pub type Attributes = BTreeMap<String, Value>;

/// Whole-sample classification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classification {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	#[serde(skip_serializing_if = "Attributes::is_empty")]
	pub attributes: Attributes,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds2D {
	pub xmin: f64,
	pub ymin: f64,
	pub xmax: f64,
	pub ymax: f64,
}

impl Bounds2D {
	pub fn width(&self) -> f64 {
		self.xmax - self.xmin
	}

	pub fn height(&self) -> f64 {
		self.ymax - self.ymin
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Box2D {
	#[serde(rename = "box2d")]
	pub bounds: Bounds2D,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	#[serde(skip_serializing_if = "Attributes::is_empty")]
	pub attributes: Attributes,
	/// Tracking identity across frames.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub instance: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Keypoint2D {
	pub x: f64,
	pub y: f64,
	/// Visibility flag; absent when the dataset does not annotate visibility.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub v: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keypoints2D {
	#[serde(rename = "keypoints2d")]
	pub keypoints: Vec<Keypoint2D>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub category: Option<String>,
	#[serde(skip_serializing_if = "Attributes::is_empty")]
	pub attributes: Attributes,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub instance: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Word {
	pub text: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub begin: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub end: Option<f64>,
}

/// Transcribed speech with optional spelling and phonetic tiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sentence {
	pub sentence: Vec<Word>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub spell: Vec<Word>,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub phone: Vec<Word>,
	#[serde(skip_serializing_if = "Attributes::is_empty")]
	pub attributes: Attributes,
}

impl TypeMixin for Classification {
	type Kind = LabelKind;
}

impl TypeMixin for Box2D {
	type Kind = LabelKind;
}

impl TypeMixin for Keypoints2D {
	type Kind = LabelKind;
}

impl TypeMixin for Sentence {
	type Kind = LabelKind;
}

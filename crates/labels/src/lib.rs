//! Label and catalog types dispatched through a kind registry.
//!
//! Every [`LabelKind`] has a label type on the primary axis and a subcatalog
//! type on the subcatalog axis. [`register_builtins`] binds them at startup;
//! [`Catalog`] and [`LabelSet`] then resolve each JSON entry to its type by
//! registry lookup instead of matching on the kind.

pub mod annotation;
pub mod builtins;
pub mod catalog;
pub mod error;
pub mod kind;
pub mod label;
pub mod subcatalog;

pub use annotation::{Annotation, LabelClass, Loads, annotation_kind};
pub use builtins::{LabelRegistry, install, label_registry, register_builtins};
pub use catalog::{Catalog, LabelSet, load_label, load_subcatalog};
pub use error::{LabelError, Result};
pub use kind::LabelKind;
pub use label::{Attributes, Bounds2D, Box2D, Classification, Keypoint2D, Keypoints2D, Sentence, Word};
pub use subcatalog::{
	AttributeInfo, Box2DSubcatalog, CategoryInfo, ClassificationSubcatalog, Keypoints2DSubcatalog, KeypointsInfo, SentenceSubcatalog,
};

use kindreg_registry::kind_enum;

kind_enum! {
	/// Label types a dataset can carry.
	pub enum LabelKind {
		/// Whole-sample category and attributes.
		Classification => "CLASSIFICATION",
		/// Axis-aligned 2D bounding box.
		Box2D => "BOX2D",
		/// Ordered 2D keypoints.
		Keypoints2D => "KEYPOINTS2D",
		/// Transcribed speech.
		Sentence => "SENTENCE",
	}
}

//! Shared enumerations and implementation types for unit tests.

use crate::{TypeMixin, kind_enum};

kind_enum! {
	pub enum Shape {
		Circle => "CIRCLE",
		Square => "SQUARE",
		Triangle => "TRIANGLE",
	}
}

kind_enum! {
	pub enum Color {
		Red => "RED",
		/// Same canonical name as [`Shape::Circle`].
		Circle => "CIRCLE",
	}
}

#[derive(Debug, Default, PartialEq)]
pub struct CircleImpl {
	pub radius: u32,
}

impl TypeMixin for CircleImpl {
	type Kind = Shape;
}

#[derive(Debug, Default, PartialEq)]
pub struct SquareImpl;

impl TypeMixin for SquareImpl {
	type Kind = Shape;
}

#[derive(Debug, Default, PartialEq)]
pub struct RoundShapes;

impl TypeMixin for RoundShapes {
	type Kind = Shape;
}

#[derive(Debug, Default, PartialEq)]
pub struct RedImpl;

impl TypeMixin for RedImpl {
	type Kind = Color;
}

#[derive(Debug)]
pub struct NeverRegistered;

impl TypeMixin for NeverRegistered {
	type Kind = Shape;
}

//! Closed tag enumerations.
//!
//! A kind enumeration is a plain value type: a fixed set of named members with
//! no state of its own. Bindings from members to implementations live in a
//! [`crate::KindRegistry`], never on the tag itself.

use core::fmt;
use core::hash::Hash;

/// A closed, named set of tags.
///
/// Implement this with [`crate::kind_enum!`] rather than by hand; the macro keeps
/// [`Kind::ALL`] and [`Kind::name`] in sync with the variant list.
pub trait Kind: Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static {
	/// Name of the enumeration type, used in diagnostics.
	const ENUM_NAME: &'static str;

	/// Every member, in declaration order.
	const ALL: &'static [Self];

	/// Returns the canonical member name.
	fn name(self) -> &'static str;

	/// Looks up a member by its canonical name.
	fn from_name(name: &str) -> Option<Self> {
		Self::ALL.iter().copied().find(|kind| kind.name() == name)
	}
}

/// Declares a kind enumeration.
///
/// Each variant is paired with its canonical name. The generated type derives
/// the usual value traits and implements [`Kind`], `Display` and `FromStr`.
///
/// ```
/// kindreg_registry::kind_enum! {
/// 	/// Shapes a renderer can draw.
/// 	pub enum Shape {
/// 		Circle => "CIRCLE",
/// 		Square => "SQUARE",
/// 	}
/// }
///
/// assert_eq!(Shape::Circle.to_string(), "CIRCLE");
/// assert_eq!("SQUARE".parse::<Shape>(), Ok(Shape::Square));
/// ```
#[macro_export]
macro_rules! kind_enum {
	(
		$(#[$attr:meta])*
		$vis:vis enum $name:ident {
			$( $(#[$vattr:meta])* $variant:ident => $label:literal ),+ $(,)?
		}
	) => {
		$(#[$attr])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		$vis enum $name {
			$( $(#[$vattr])* $variant, )+
		}

		impl $crate::Kind for $name {
			const ENUM_NAME: &'static str = stringify!($name);
			const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

			fn name(self) -> &'static str {
				match self {
					$( Self::$variant => $label, )+
				}
			}
		}

		impl ::core::fmt::Display for $name {
			fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
				f.write_str($crate::Kind::name(*self))
			}
		}

		impl ::core::str::FromStr for $name {
			type Err = $crate::UnknownKind;

			fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
				<Self as $crate::Kind>::from_name(s).ok_or_else(|| $crate::UnknownKind::new(<Self as $crate::Kind>::ENUM_NAME, s))
			}
		}
	};
}

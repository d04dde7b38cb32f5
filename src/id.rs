//! Identifier coercion.
//!
//! Ids reach this crate from two untyped places: JSON data and the value of the selector control.
//! [`RawId`] keeps them as they arrived so that "missing" can be told apart from "present but invalid".

use num_traits::ToPrimitive;

/// An identifier as received, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawId {
	Missing,
	Number(f64),
	Text(String),
}

impl RawId {
	/// Whether this identifier counts as not provided at all: [`RawId::Missing`], zero, NaN or the empty string.
	#[must_use]
	pub fn is_falsy(&self) -> bool {
		match self {
			RawId::Missing => true,
			RawId::Number(number) => *number == 0.0 || number.is_nan(),
			RawId::Text(text) => text.is_empty(),
		}
	}

	/// Numeric interpretation. Surrounding whitespace is ignored, blank text is `0` and anything unparsable is NaN.
	#[must_use]
	pub fn numeric(&self) -> f64 {
		match self {
			RawId::Missing => f64::NAN,
			RawId::Number(number) => *number,
			RawId::Text(text) => {
				let text = text.trim();
				if text.is_empty() {
					0.0
				} else {
					text.parse().unwrap_or(f64::NAN)
				}
			}
		}
	}

	/// The id to request with, or [`None`] if no request should be made.
	///
	/// Non-numeric ids and ids below 1 become 1. Fractional ids are floored.
	#[must_use]
	pub fn coerce(&self) -> Option<u32> {
		if self.is_falsy() {
			return None;
		}

		let number = self.numeric();
		if number.is_nan() || number < 1.0 {
			Some(1)
		} else {
			Some(number.floor().to_u32().unwrap_or(1))
		}
	}
}

impl From<u32> for RawId {
	fn from(id: u32) -> Self {
		RawId::Number(id.into())
	}
}

impl From<i32> for RawId {
	fn from(id: i32) -> Self {
		RawId::Number(id.into())
	}
}

impl From<f64> for RawId {
	fn from(id: f64) -> Self {
		RawId::Number(id)
	}
}

impl From<&str> for RawId {
	fn from(id: &str) -> Self {
		RawId::Text(id.to_owned())
	}
}

impl From<String> for RawId {
	fn from(id: String) -> Self {
		RawId::Text(id)
	}
}

impl<T: Into<RawId>> From<Option<T>> for RawId {
	fn from(id: Option<T>) -> Self {
		id.map_or(RawId::Missing, Into::into)
	}
}

/// Sanitizes the value of the user selector into a user id.
///
/// `"0"` and non-numeric values select user 1, negative values their floored absolute value
/// and values strictly between 0 and 1 select user 1.
#[must_use]
pub fn sanitize_selection(value: &str) -> u32 {
	let number = RawId::from(value).numeric();
	let number = if number == 0.0 || number.is_nan() {
		1.0
	} else if number < 0.0 {
		number.floor().abs()
	} else if number < 1.0 {
		1.0
	} else {
		number
	};
	RawId::Number(number).coerce().unwrap_or(1)
}

#[cfg(test)]
mod tests {
	use super::{sanitize_selection, RawId};

	#[test]
	fn falsy_ids_are_not_coerced() {
		assert_eq!(RawId::Missing.coerce(), None);
		assert_eq!(RawId::from(0_u32).coerce(), None);
		assert_eq!(RawId::from(f64::NAN).coerce(), None);
		assert_eq!(RawId::from("").coerce(), None);
		assert_eq!(RawId::from(None::<u32>).coerce(), None);
	}

	#[test]
	fn invalid_ids_become_one() {
		assert_eq!(RawId::from(-4_i32).coerce(), Some(1));
		assert_eq!(RawId::from(0.5).coerce(), Some(1));
		assert_eq!(RawId::from("abc").coerce(), Some(1));
		assert_eq!(RawId::from("0").coerce(), Some(1));
		assert_eq!(RawId::from(f64::INFINITY).coerce(), Some(1));
	}

	#[test]
	fn valid_ids_pass_through() {
		assert_eq!(RawId::from(7_u32).coerce(), Some(7));
		assert_eq!(RawId::from(" 12 ").coerce(), Some(12));
		assert_eq!(RawId::from(2.9).coerce(), Some(2));
		assert_eq!(RawId::from(Some("3")).coerce(), Some(3));
	}

	#[test]
	fn selection_values() {
		assert_eq!(sanitize_selection("0"), 1);
		assert_eq!(sanitize_selection("-3"), 3);
		assert_eq!(sanitize_selection("-2.5"), 3);
		assert_eq!(sanitize_selection("-0.5"), 1);
		assert_eq!(sanitize_selection("0.5"), 1);
		assert_eq!(sanitize_selection("abc"), 1);
		assert_eq!(sanitize_selection(""), 1);
		assert_eq!(sanitize_selection("7"), 7);
	}
}

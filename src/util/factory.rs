/* Copyright © 2024-2025 Adam Train <adam@adamtrain.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::util::rational::Rational;
use log::debug;
use serde::Deserialize;

/// An untyped quantity as it arrives from outside: a JSON or TOML number, a
/// user-typed string, or a value that was already converted.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawQuantity {
	Integer(i64),
	Number(f64),
	Text(String),
	#[serde(skip)]
	Fraction(Rational),
}

impl From<f64> for RawQuantity {
	fn from(value: f64) -> Self {
		RawQuantity::Number(value)
	}
}

impl From<i64> for RawQuantity {
	fn from(value: i64) -> Self {
		RawQuantity::Integer(value)
	}
}

impl From<&str> for RawQuantity {
	fn from(value: &str) -> Self {
		RawQuantity::Text(value.to_string())
	}
}

impl From<String> for RawQuantity {
	fn from(value: String) -> Self {
		RawQuantity::Text(value)
	}
}

impl From<Rational> for RawQuantity {
	fn from(value: Rational) -> Self {
		RawQuantity::Fraction(value)
	}
}

/// Lenient entry point for collaborator code. Returns `None` for anything
/// that cannot be read as a quantity instead of failing.
///
/// Text is read as a float first and then as a fraction or mixed number, so
/// `"3.5"`, `"3/4"` and `"1 1/2"` are all accepted. An existing fraction is
/// returned as a copy.
pub fn create_fraction(input: impl Into<RawQuantity>) -> Option<Rational> {
	let result = match input.into() {
		RawQuantity::Integer(value) => Rational::new(value),
		RawQuantity::Number(value) => Rational::new(value),
		RawQuantity::Text(text) => match text.trim().parse::<f64>() {
			Ok(value) => Rational::new(value),
			Err(_) => text.parse::<Rational>(),
		},
		RawQuantity::Fraction(value) => return Some(value),
	};

	match result {
		Ok(value) => Some(value),
		Err(e) => {
			debug!("not a quantity: {}", e);
			None
		},
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_text_decimal() {
		assert_eq!(create_fraction("3.5"), Some(Rational::new(3.5).unwrap()));
		assert_eq!(create_fraction(" 0.25 "), Rational::from_frac(1, 4).ok());
		assert_eq!(create_fraction("-2"), Some(Rational::from_i128(-2)));
	}

	#[test]
	fn test_text_fraction() {
		assert_eq!(create_fraction("3/4"), Rational::from_frac(3, 4).ok());
		assert_eq!(create_fraction("1 1/2"), Rational::from_frac(3, 2).ok());
	}

	#[test]
	fn test_not_a_number() {
		assert_eq!(create_fraction("not a number"), None);
		assert_eq!(create_fraction(""), None);
		assert_eq!(create_fraction("1/0"), None);
		assert_eq!(create_fraction("NaN"), None);
		assert_eq!(create_fraction("inf"), None);
	}

	#[test]
	fn test_numbers() {
		assert_eq!(create_fraction(0.75), Rational::from_frac(3, 4).ok());
		assert_eq!(create_fraction(12i64), Some(Rational::from_i128(12)));
		assert_eq!(create_fraction(f64::NAN), None);
		assert_eq!(create_fraction(f64::INFINITY), None);
	}

	#[test]
	fn test_large_integers_are_exact() {
		let beyond_f64 = 9_007_199_254_740_993i64;
		assert_eq!(create_fraction(beyond_f64), Rational::new(beyond_f64).ok());
		assert_eq!(
			create_fraction(beyond_f64).unwrap().numerator(),
			9_007_199_254_740_993
		);

		let quantity: RawQuantity =
			serde_json::from_str("9007199254740993").unwrap();
		assert_eq!(quantity, RawQuantity::Integer(beyond_f64));
		assert_eq!(create_fraction(quantity), Rational::new(beyond_f64).ok());
	}

	#[test]
	fn test_existing_fraction_is_copied() {
		let original = Rational::from_frac(22, 7).unwrap();
		let copy = create_fraction(original).unwrap();
		assert_eq!(copy, original);
		assert_eq!(copy.numerator(), 22);
		assert_eq!(copy.denominator(), 7);
	}

	#[test]
	fn test_deserialize() {
		let quantities: Vec<Option<RawQuantity>> =
			serde_json::from_str(r#"[1.5, "1/2", null, 2]"#).unwrap();
		assert_eq!(
			quantities,
			vec![
				Some(RawQuantity::Number(1.5)),
				Some(RawQuantity::Text("1/2".to_string())),
				None,
				Some(RawQuantity::Integer(2)),
			]
		);
	}
}

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
use crate::config::config_file::DisplayStyle;
use crate::util::factory::{create_fraction, RawQuantity};
use crate::util::rational::Rational;
use log::warn;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// One line of a recipe: an optional exact quantity with its unit.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Hash)]
pub struct Ingredient {
	/// Resolved through the lenient factory while loading, so anything the
	/// source could not express as a number is simply absent.
	#[serde(default, deserialize_with = "lenient_quantity")]
	pub quantity: Option<Rational>,
	#[serde(default)]
	pub unit: String,
	pub description: String,
}

fn lenient_quantity<'de, D>(
	deserializer: D,
) -> Result<Option<Rational>, D::Error>
where
	D: Deserializer<'de>,
{
	let raw = Option::<RawQuantity>::deserialize(deserializer)?;
	Ok(raw.and_then(create_fraction))
}

impl Ingredient {
	pub fn new(
		quantity: Option<Rational>,
		unit: &str,
		description: &str,
	) -> Self {
		Self {
			quantity,
			unit: unit.to_string(),
			description: description.to_string(),
		}
	}

	/// Multiplies the quantity by `ratio`. If that cannot be done exactly the
	/// original quantity is kept and a warning is logged, so the worst case
	/// is an unscaled line rather than a failed recipe.
	pub fn scaled(&self, ratio: Rational) -> Self {
		let quantity = self.quantity.map(|quantity| {
			quantity.multiply(ratio).unwrap_or_else(|e| {
				warn!(
					"could not scale {} of {} by {}: {}",
					quantity, self.description, ratio, e
				);
				quantity
			})
		});

		Self {
			quantity,
			..self.clone()
		}
	}

	/// Renders the quantity for display; empty when there is none.
	pub fn display_quantity(&self, style: DisplayStyle) -> String {
		match self.quantity {
			None => String::new(),
			Some(quantity) => match style {
				DisplayStyle::Mixed => quantity.to_mixed_number(),
				DisplayStyle::Fraction => quantity.to_string(),
				DisplayStyle::Decimal => quantity.to_number().to_string(),
			},
		}
	}
}

impl fmt::Display for Ingredient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let parts: Vec<String> = [
			self.display_quantity(DisplayStyle::Mixed),
			self.unit.clone(),
			self.description.clone(),
		]
		.into_iter()
		.filter(|part| !part.is_empty())
		.collect();

		write!(f, "{}", parts.join(" "))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn frac(numerator: i128, denominator: i128) -> Rational {
		Rational::from_frac(numerator, denominator).unwrap()
	}

	#[test]
	fn test_deserialize_number() {
		let ingredient: Ingredient = serde_json::from_str(
			r#"{"quantity": 1.5, "unit": "cups", "description": "flour"}"#,
		)
		.unwrap();
		assert_eq!(
			ingredient,
			Ingredient::new(Some(frac(3, 2)), "cups", "flour")
		);
	}

	#[test]
	fn test_deserialize_text() {
		let ingredient: Ingredient = serde_json::from_str(
			r#"{"quantity": "1 1/2", "unit": "tbsp", "description": "butter"}"#,
		)
		.unwrap();
		assert_eq!(ingredient.quantity, Some(frac(3, 2)));
	}

	#[test]
	fn test_deserialize_missing_quantity() {
		let ingredient: Ingredient = serde_json::from_str(
			r#"{"quantity": null, "unit": "", "description": "salt to taste"}"#,
		)
		.unwrap();
		assert_eq!(ingredient.quantity, None);

		let ingredient: Ingredient =
			serde_json::from_str(r#"{"description": "pepper"}"#).unwrap();
		assert_eq!(ingredient, Ingredient::new(None, "", "pepper"));
	}

	#[test]
	fn test_deserialize_unreadable_quantity() {
		let ingredient: Ingredient = serde_json::from_str(
			r#"{"quantity": "a pinch", "unit": "", "description": "salt"}"#,
		)
		.unwrap();
		assert_eq!(ingredient.quantity, None);
	}

	#[test]
	fn test_scaled() {
		let ingredient = Ingredient::new(Some(frac(5, 2)), "cups", "flour");
		let scaled = ingredient.scaled(frac(3, 2));
		assert_eq!(scaled.quantity, Some(frac(15, 4)));
		assert_eq!(scaled.unit, "cups");
		assert_eq!(ingredient.quantity, Some(frac(5, 2)));
	}

	#[test]
	fn test_scaled_without_quantity() {
		let ingredient = Ingredient::new(None, "", "salt");
		assert_eq!(ingredient.scaled(frac(3, 2)), ingredient);
	}

	#[test]
	fn test_scaled_overflow_keeps_original() {
		let huge = frac(i128::MAX, 1);
		let ingredient = Ingredient::new(Some(huge), "g", "sugar");
		assert_eq!(ingredient.scaled(frac(2, 1)).quantity, Some(huge));
	}

	#[test]
	fn test_display_quantity() {
		let ingredient = Ingredient::new(Some(frac(15, 4)), "cups", "flour");
		assert_eq!(ingredient.display_quantity(DisplayStyle::Mixed), "3 3/4");
		assert_eq!(ingredient.display_quantity(DisplayStyle::Fraction), "15/4");
		assert_eq!(ingredient.display_quantity(DisplayStyle::Decimal), "3.75");

		let empty = Ingredient::new(None, "", "salt");
		assert_eq!(empty.display_quantity(DisplayStyle::Mixed), "");
	}

	#[test]
	fn test_display() {
		let ingredient = Ingredient::new(Some(frac(1, 2)), "tsp", "salt");
		assert_eq!(ingredient.to_string(), "1/2 tsp salt");

		let ingredient = Ingredient::new(Some(frac(2, 1)), "", "eggs");
		assert_eq!(ingredient.to_string(), "2 eggs");

		let ingredient = Ingredient::new(None, "", "olive oil");
		assert_eq!(ingredient.to_string(), "olive oil");
	}
}

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
use crate::kitchen::ingredient::Ingredient;
use crate::util::rational::Rational;
use anyhow::{anyhow, bail, Error};
use log::debug;
use serde::Deserialize;
use serde_json::Value;

/// A recipe as served by the recipe API.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Recipe {
	pub title: String,
	#[serde(default)]
	pub publisher: Option<String>,
	pub servings: u32,
	#[serde(default)]
	pub cooking_time: Option<u32>,
	pub ingredients: Vec<Ingredient>,
}

impl Recipe {
	/// Parses a bare recipe object, or one wrapped in the API's
	/// `{"data": {"recipe": ...}}` envelope.
	pub fn from_json(input: &str) -> Result<Self, Error> {
		let mut document: Value = serde_json::from_str(input)
			.map_err(|e| anyhow!("failed to parse recipe: {}", e))?;

		let recipe = if document.pointer("/data/recipe").is_some() {
			document["data"]["recipe"].take()
		} else {
			document
		};

		serde_json::from_value(recipe)
			.map_err(|e| anyhow!("failed to parse recipe: {}", e))
	}

	/// Returns a copy of this recipe with every quantity rescaled from the
	/// current serving count to `servings`. Scaling always starts from the
	/// exact stored fractions, so scaling back and forth never drifts.
	pub fn scale_to(&self, servings: u32) -> Result<Self, Error> {
		if servings == 0 {
			bail!("Servings must be at least 1");
		}
		if self.servings == 0 {
			bail!("Recipe \"{}\" has no servings to scale from", self.title);
		}

		let ratio = Rational::new(servings)?.divide(self.servings)?;
		debug!(
			"scaling {} from {} to {} servings by {}",
			self.title, self.servings, servings, ratio
		);

		Ok(Self {
			servings,
			ingredients: self
				.ingredients
				.iter()
				.map(|ingredient| ingredient.scaled(ratio))
				.collect(),
			..self.clone()
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const PANCAKES: &str = r#"{
		"title": "Pancakes",
		"publisher": "Kitchen",
		"servings": 4,
		"cooking_time": 20,
		"ingredients": [
			{"quantity": 2.5, "unit": "cups", "description": "flour"},
			{"quantity": 0.5, "unit": "tsp", "description": "salt"},
			{"quantity": 1, "unit": "", "description": "egg"},
			{"quantity": null, "unit": "", "description": "butter for the pan"},
			{"quantity": "1/3", "unit": "cup", "description": "milk"}
		]
	}"#;

	fn frac(numerator: i128, denominator: i128) -> Rational {
		Rational::from_frac(numerator, denominator).unwrap()
	}

	fn quantities(recipe: &Recipe) -> Vec<Option<Rational>> {
		recipe.ingredients.iter().map(|i| i.quantity).collect()
	}

	#[test]
	fn test_from_json_bare() {
		let recipe = Recipe::from_json(PANCAKES).unwrap();
		assert_eq!(recipe.title, "Pancakes");
		assert_eq!(recipe.publisher.as_deref(), Some("Kitchen"));
		assert_eq!(recipe.servings, 4);
		assert_eq!(recipe.cooking_time, Some(20));
		assert_eq!(
			quantities(&recipe),
			vec![
				Some(frac(5, 2)),
				Some(frac(1, 2)),
				Some(frac(1, 1)),
				None,
				Some(frac(1, 3)),
			]
		);
	}

	#[test]
	fn test_from_json_envelope() {
		let wrapped = format!(r#"{{"data": {{"recipe": {}}}}}"#, PANCAKES);
		assert_eq!(
			Recipe::from_json(&wrapped).unwrap(),
			Recipe::from_json(PANCAKES).unwrap()
		);
	}

	#[test]
	fn test_from_json_reports_missing_field() {
		let bare = r#"{"title": "Soup", "ingredients": []}"#;
		let error = Recipe::from_json(bare).unwrap_err().to_string();
		assert!(error.contains("missing field `servings`"), "{}", error);

		let wrapped = format!(r#"{{"data": {{"recipe": {}}}}}"#, bare);
		let error = Recipe::from_json(&wrapped).unwrap_err().to_string();
		assert!(error.contains("missing field `servings`"), "{}", error);
	}

	#[test]
	fn test_from_json_invalid() {
		assert!(Recipe::from_json("{\"title\": \"No servings\"}").is_err());
		assert!(Recipe::from_json("not json").is_err());
	}

	#[test]
	fn test_scale_to() {
		let recipe = Recipe::from_json(PANCAKES).unwrap();
		let scaled = recipe.scale_to(6).unwrap();

		assert_eq!(scaled.servings, 6);
		assert_eq!(scaled.title, recipe.title);
		assert_eq!(
			quantities(&scaled),
			vec![
				Some(frac(15, 4)),
				Some(frac(3, 4)),
				Some(frac(3, 2)),
				None,
				Some(frac(1, 2)),
			]
		);
	}

	#[test]
	fn test_scale_back_and_forth() {
		let recipe = Recipe::from_json(PANCAKES).unwrap();

		let mut current = recipe.clone();
		for servings in [3, 7, 11, 1, 9, 4] {
			current = current.scale_to(servings).unwrap();
		}

		assert_eq!(current, recipe);
	}

	#[test]
	fn test_scale_to_zero() {
		let recipe = Recipe::from_json(PANCAKES).unwrap();
		assert!(recipe.scale_to(0).is_err());
	}

	#[test]
	fn test_scale_from_zero() {
		let mut recipe = Recipe::from_json(PANCAKES).unwrap();
		recipe.servings = 0;
		assert!(recipe.scale_to(4).is_err());
	}
}

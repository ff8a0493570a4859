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
use crate::kitchen::recipe::Recipe;
use crate::reports::table::Table;

pub struct RecipeReporter {
	recipe: Recipe,
	style: DisplayStyle,
}

impl RecipeReporter {
	pub fn new(recipe: Recipe, style: DisplayStyle) -> RecipeReporter {
		Self { recipe, style }
	}

	pub fn print(&self) {
		print!("{}", self.render());
	}

	/// Title line, a blank line, then one table row per ingredient.
	pub fn render(&self) -> String {
		let mut table = Table::new(3);

		table.add_header(vec!["Quantity", "Unit", "Ingredient"]);
		table.add_separator();
		table.right_align(vec![0]);

		for ingredient in &self.recipe.ingredients {
			table.add_row(vec![
				&ingredient.display_quantity(self.style),
				&ingredient.unit,
				&ingredient.description,
			]);
		}

		format!(
			"{} ({} {})\n\n{}",
			self.recipe.title,
			self.recipe.servings,
			if self.recipe.servings == 1 {
				"serving"
			} else {
				"servings"
			},
			table.render()
		)
	}
}

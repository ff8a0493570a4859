/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
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
use anyhow::{anyhow, bail, Error};
use clap::{Parser, ValueEnum};
use fractional::config::config_file::DisplayStyle;
use fractional::create_fraction;
use fractional::kitchen::recipe::Recipe;
use fractional::parsing::filesystem::Filesystem;
use fractional::reports::recipe_reporter::RecipeReporter;

#[derive(Parser)]
#[command(
	name = "fractional",
	version = "1.0",
	about = "Exact fractions for scaling recipe quantities"
)]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// The command to execute
	command: Directive,

	/// The quantity for the Convert command
	#[arg(required = false)]
	term: Option<String>,

	// -----------
	// -- FLAGS --
	// -----------
	/// Specifies the recipe file (JSON)
	#[arg(short)]
	file: Option<String>,

	/// Number of servings to scale the recipe to
	#[arg(short, long)]
	servings: Option<u32>,

	/// How to render quantities (overrides the config file)
	#[arg(long)]
	style: Option<DisplayStyle>,

	/// Custom config file location (default: ~/.config/fractional/config.toml)
	#[arg(long)]
	config: Option<String>,
}

impl Cli {
	/// Nobody cooks for more than this; it only stops typos from producing
	/// absurd tables
	const MAX_SERVINGS: u32 = 1000;

	/// Extra validations on top of what clap does
	fn validate(&self) -> Result<(), Error> {
		if let Some(servings) = self.servings {
			if servings == 0 || servings > Cli::MAX_SERVINGS {
				bail!("Servings must be between 1 and {}", Cli::MAX_SERVINGS);
			}
		}

		match self.command {
			Directive::Show | Directive::Scale if self.file.is_none() => {
				bail!("No recipe file specified")
			},
			Directive::Scale if self.servings.is_none() => {
				bail!("No servings specified")
			},
			Directive::Convert if self.term.is_none() => {
				bail!("No quantity specified")
			},
			_ => {},
		}

		Ok(())
	}
}

#[derive(ValueEnum, Clone, PartialEq)]
enum Directive {
	Show,    // print a recipe as written
	Scale,   // print a recipe rescaled to new servings
	Convert, // print a single quantity in every style
}

fn main() -> Result<(), Error> {
	env_logger::init();

	let args = Cli::parse();
	args.validate()?;

	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;
	let style = args.style.or(config.style()).unwrap_or_default();

	match args.command {
		Directive::Show => {
			let recipe = read_recipe(&fs, &args)?;
			RecipeReporter::new(recipe, style).print();
		},
		Directive::Scale => {
			let recipe = read_recipe(&fs, &args)?;
			let servings = args
				.servings
				.ok_or_else(|| anyhow!("No servings specified"))?;
			RecipeReporter::new(recipe.scale_to(servings)?, style).print();
		},
		Directive::Convert => {
			let term = args.term.unwrap_or_default();
			let Some(quantity) = create_fraction(term.as_str()) else {
				bail!("Could not interpret quantity: {}", term);
			};

			println!("fraction: {}", quantity);
			println!("mixed: {}", quantity.to_mixed_number());
			println!("decimal: {}", quantity.to_number());
		},
	}

	Ok(())
}

fn read_recipe(fs: &Filesystem, args: &Cli) -> Result<Recipe, Error> {
	let file = args
		.file
		.as_ref()
		.ok_or_else(|| anyhow!("No recipe file specified"))?;
	fs.read_recipe(file)
}

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
use clap::ValueEnum;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub display: Option<Display>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Display {
	pub style: Option<DisplayStyle>,
}

/// How quantities are rendered in reports.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
	/// Whole part and proper fraction, e.g. 3 1/2
	#[default]
	Mixed,

	/// Improper fraction, e.g. 7/2
	Fraction,

	/// Floating-point decimal, e.g. 3.5
	Decimal,
}

impl Config {
	/// The configured style, if the config file names one.
	pub fn style(&self) -> Option<DisplayStyle> {
		self.display.as_ref().and_then(|display| display.style)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_empty() {
		let config: Config = toml::from_str("").unwrap();
		assert_eq!(config.style(), None);
	}

	#[test]
	fn test_style() {
		let config: Config =
			toml::from_str("[display]\nstyle = \"fraction\"\n").unwrap();
		assert_eq!(config.style(), Some(DisplayStyle::Fraction));
	}

	#[test]
	fn test_unknown_style() {
		let result = toml::from_str::<Config>("[display]\nstyle = \"roman\"\n");
		assert!(result.is_err());
	}
}

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
use crate::config::config_file::Config;
use crate::kitchen::recipe::Recipe;
use anyhow::{anyhow, Error};
use dirs::home_dir;
use log::debug;
use std::fs;
use std::fs::File;
use std::path::PathBuf;

pub struct Filesystem {
	default_config_path: Option<PathBuf>,
}

impl Filesystem {
	pub fn new() -> Self {
		Self {
			default_config_path: home_dir()
				.map(|home| home.join(".config/fractional/config.toml")),
		}
	}

	/// Reads and parses the recipe at `file_path`.
	pub fn read_recipe(&self, file_path: &str) -> Result<Recipe, Error> {
		let content = fs::read_to_string(file_path)
			.map_err(|e| anyhow!("failed to read {}: {}", file_path, e))?;
		Recipe::from_json(&content)
	}

	/// Fetches the config from the given path, or default path if none. A
	/// missing default config is created empty; a missing custom one is an
	/// error.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match &custom_config_path {
			None => self
				.default_config_path
				.clone()
				.ok_or_else(|| anyhow!("Unable to determine home directory"))?,
			Some(p) => PathBuf::from(p),
		};

		// create empty config file if it doesn't exist
		if !config_path.exists() && custom_config_path.is_none() {
			if let Some(parent) = config_path.parent() {
				fs::create_dir_all(parent)?;
			}
			File::create(config_path.clone())?;
		}

		debug!("reading config from {}", config_path.display());
		let content = fs::read_to_string(&config_path).map_err(|e| {
			anyhow!("failed to read config {}: {}", config_path.display(), e)
		})?;
		let config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		Ok(config)
	}
}

impl Default for Filesystem {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::config_file::DisplayStyle;
	use std::io::Write;
	use tempfile::{tempdir, NamedTempFile};

	fn filesystem_in(dir: &std::path::Path) -> Filesystem {
		Filesystem {
			default_config_path: Some(dir.join("fractional/config.toml")),
		}
	}

	#[test]
	fn test_custom_config() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "[display]\nstyle = \"decimal\"").unwrap();
		let path = file.path().to_string_lossy().to_string();

		let config = Filesystem::new().get_config(Some(&path)).unwrap();
		assert_eq!(config.style(), Some(DisplayStyle::Decimal));
	}

	#[test]
	fn test_missing_custom_config() {
		let dir = tempdir().unwrap();
		let path = dir.path().join("absent.toml").to_string_lossy().to_string();
		assert!(Filesystem::new().get_config(Some(&path)).is_err());
	}

	#[test]
	fn test_default_config_is_created() {
		let dir = tempdir().unwrap();
		let filesystem = filesystem_in(dir.path());

		let config = filesystem.get_config(None).unwrap();
		assert_eq!(config.style(), None);
		assert!(dir.path().join("fractional/config.toml").exists());
	}

	#[test]
	fn test_invalid_config() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(file, "display = [").unwrap();
		let path = file.path().to_string_lossy().to_string();

		assert!(Filesystem::new().get_config(Some(&path)).is_err());
	}

	#[test]
	fn test_read_recipe() {
		let mut file = NamedTempFile::new().unwrap();
		writeln!(
			file,
			r#"{{"title": "Tea", "servings": 1, "ingredients": [{{"quantity": 0.25, "unit": "tsp", "description": "leaves"}}]}}"#
		)
		.unwrap();
		let path = file.path().to_string_lossy().to_string();

		let recipe = Filesystem::new().read_recipe(&path).unwrap();
		assert_eq!(recipe.title, "Tea");
		assert_eq!(recipe.ingredients[0].to_string(), "1/4 tsp leaves");
	}

	#[test]
	fn test_read_missing_recipe() {
		assert!(Filesystem::new().read_recipe("does/not/exist.json").is_err());
	}
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use waypost_provider_geocoder::CityPresets;
use waypost_widget_api::HighlightPalette;

use crate::app_dirs;

const CONFIG_FILE_NAME: &str = "waypost.toml";
const ENV_PREFIX: &str = "WAYPOST";

/// Corner of the map view the control is docked to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlPosition {
	TopLeft,
	#[default]
	TopRight,
	BottomLeft,
	BottomRight,
}

/// Layout direction of the control's input row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
	#[default]
	Horizontal,
	Vertical,
}

/// Widget configuration assembled from defaults, an optional config file, and
/// `WAYPOST_*` environment overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WidgetConfig {
	pub position: ControlPosition,
	pub orientation: Orientation,
	/// Whether the city geocoding page is offered at all.
	pub geocoding_enabled: bool,
	/// Optional preset file replacing the builtin city table.
	pub city_presets: Option<PathBuf>,
	pub palette: HighlightPalette,
}

impl Default for WidgetConfig {
	fn default() -> Self {
		Self {
			position: ControlPosition::default(),
			orientation: Orientation::default(),
			geocoding_enabled: true,
			city_presets: None,
			palette: HighlightPalette::default(),
		}
	}
}

impl WidgetConfig {
	/// Load configuration from the platform config directory and environment.
	pub fn load() -> Result<Self> {
		let file = app_dirs::get_config_dir()
			.map(|dir| dir.join(CONFIG_FILE_NAME))
			.ok();
		Self::load_from(file.as_deref())
	}

	/// Load configuration from an explicit file plus environment overrides.
	///
	/// A missing file is not an error; defaults apply underneath both layers.
	pub fn load_from(file: Option<&Path>) -> Result<Self> {
		let mut builder = Config::builder();
		if let Some(file) = file {
			builder = builder.add_source(
				File::from(file.to_path_buf())
					.format(FileFormat::Toml)
					.required(false),
			);
		}
		builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

		let config: WidgetConfig = builder
			.build()
			.context("failed to assemble widget configuration")?
			.try_deserialize()
			.context("failed to deserialize widget configuration")?;
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<()> {
		if let Some(path) = &self.city_presets {
			ensure!(
				path.is_file(),
				"city preset file {} does not exist",
				path.display()
			);
		}
		Ok(())
	}

	/// Resolve the city presets this configuration selects.
	///
	/// # Errors
	///
	/// Returns an error when a configured preset file cannot be read or
	/// parsed; the builtin table itself never fails.
	pub fn city_presets(&self) -> Result<CityPresets> {
		match &self.city_presets {
			Some(path) => {
				let text = fs::read_to_string(path).with_context(|| {
					format!("failed to read city preset file {}", path.display())
				})?;
				CityPresets::from_toml_str(&text).with_context(|| {
					format!("failed to parse city preset file {}", path.display())
				})
			}
			None => Ok(CityPresets::builtin().clone()),
		}
	}
}

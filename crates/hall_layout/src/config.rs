use crate::{
    constants::{
        DEFAULT_HALL_LENGTH, DEFAULT_HALL_WIDTH, DEFAULT_IGNORED_COLUMN, DEFAULT_OUTPUT_DIR,
        DEFAULT_ROW_HEIGHT, ENV_OUTPUT_DIR,
    },
    error::{LayoutError, Result},
    geometry::{ForcedHeights, HallSpec},
    visualization::RenderOptions,
};
use serde::{Deserialize, Serialize};
use std::{env, path::Path, path::PathBuf};

/// Top-level configuration (config/default.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub hall: HallConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub render: RenderOptions,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HallConfig {
    pub length: f64,             // [m]
    pub width: f64,              // [m]
    pub default_row_height: f64, // [m]
    pub ignore: Vec<String>,     // labels excluded from intrusion marking
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    pub columns: Option<PathBuf>,
    pub forced_rows: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub svg: bool,
    pub json: bool,
    pub csv: bool,
    pub report: bool, // print the row summary to stdout
}

impl Default for HallConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_HALL_LENGTH,
            width: DEFAULT_HALL_WIDTH,
            default_row_height: DEFAULT_ROW_HEIGHT,
            ignore: vec![DEFAULT_IGNORED_COLUMN.to_string()],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            svg: true,
            json: false,
            csv: false,
            report: true,
        }
    }
}

impl Config {
    /// Read, parse and validate a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LayoutError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_toml_str(&content).map_err(|e| {
            LayoutError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        // relative input paths are resolved against the config file location
        if let Some(base) = path.parent() {
            config.input.columns = config.input.columns.map(|p| resolve(base, p));
            config.input.forced_rows = config.input.forced_rows.map(|p| resolve(base, p));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply `HALL_LAYOUT_OUTPUT_DIR` when it is set and not blank
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(dir) = env::var(ENV_OUTPUT_DIR)
            && !dir.trim().is_empty()
        {
            let path = PathBuf::from(dir);
            if path.exists() && !path.is_dir() {
                return Err(LayoutError::Config(format!(
                    "Output path is not a directory: {}",
                    path.display()
                )));
            }
            self.output.dir = path;
        }
        Ok(())
    }

    /// Sanity checks on values the layout core does not cover.
    ///
    /// Row heights are left to the row builder, which reports `InvalidConfiguration`.
    pub fn validate(&self) -> Result<()> {
        let hall = &self.hall;
        for (name, value) in [
            ("hall.length", hall.length),
            ("hall.width", hall.width),
            ("hall.default_row_height", hall.default_row_height),
        ] {
            if !value.is_finite() {
                return Err(LayoutError::Config(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        if hall.width < 0.0 {
            return Err(LayoutError::Config(format!(
                "hall.width must not be negative, got {}",
                hall.width
            )));
        }

        let render = &self.render;
        if !(render.scale_px_per_m.is_finite() && render.scale_px_per_m > 0.0) {
            return Err(LayoutError::Config(format!(
                "render.scale_px_per_m must be positive, got {}",
                render.scale_px_per_m
            )));
        }
        if !(render.margin_px.is_finite() && render.margin_px >= 0.0) {
            return Err(LayoutError::Config(format!(
                "render.margin_px must not be negative, got {}",
                render.margin_px
            )));
        }

        Ok(())
    }

    /// Hall parameters for one layout computation
    pub fn hall_spec(&self, forced_heights: ForcedHeights) -> HallSpec {
        HallSpec::new(
            self.hall.length,
            self.hall.width,
            self.hall.default_row_height,
        )
        .with_forced_heights(forced_heights)
        .with_ignored(self.hall.ignore.iter().cloned())
    }
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

use color_eyre::eyre::WrapErr;
use cube_core::cube::{DEFAULT_COLORS, DEFAULT_SIZE};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Settings read from the configuration file. Every field is optional in the
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Cube size
    pub size: usize,
    /// One symbol per face in `U F R B L D` order
    pub colors: String,
    /// Scramble length, `8 × size` if absent
    pub scramble_length: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size: DEFAULT_SIZE,
            colors: DEFAULT_COLORS.iter().collect(),
            scramble_length: None,
        }
    }
}

/// `<config dir>/cubing/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cubing").join("config.toml"))
}

impl Config {
    /// Load the configuration from `path`, or from the default location if no
    /// path is given. A missing default file means the built-in defaults.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Config> {
        match path {
            Some(path) => Config::read(path),
            None => match default_path() {
                Some(path) if path.is_file() => Config::read(&path),
                _ => {
                    debug!("No configuration file found, using defaults");
                    Ok(Config::default())
                }
            },
        }
    }

    fn read(path: &Path) -> color_eyre::Result<Config> {
        debug!("Reading configuration from {}", path.display());

        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;

        toml::from_str(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))
    }
}

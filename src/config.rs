//! Configuration for the `initials` renderer.
//!
//! Supports YAML configuration with precedence: CLI > ENV > file > defaults.

use crate::error::{Error, Result};
use crate::scene::Scene;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable overriding [`Config::output`].
pub const ENV_OUTPUT: &str = "INITIALS_OUTPUT";

/// Environment variable enabling debug output (`1`, `true`, `yes`).
pub const ENV_DEBUG: &str = "INITIALS_DEBUG";

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Path of the encoded image.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Enable debug logging to stderr.
    #[serde(default)]
    pub debug: bool,

    /// Scene to draw; the initials picture when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
}

fn default_version() -> u32 {
    1
}
fn default_output() -> PathBuf {
    PathBuf::from("initials.png")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            output: default_output(),
            debug: false,
            scene: None,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/initials/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("initials").join("config.yaml"))
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist,
    /// [`Error::Io`] for any other read failure, and [`Error::ConfigParse`]
    /// for invalid YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration, falling back to defaults only when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns read and parse errors for a file that exists.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        match Self::load(path) {
            Err(Error::ConfigNotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Apply overrides from the process environment.
    #[must_use]
    pub fn apply_env(self) -> Self {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup.
    #[must_use]
    pub fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(output) = lookup(ENV_OUTPUT).filter(|v| !v.is_empty()) {
            self.output = PathBuf::from(output);
        }
        if let Some(flag) = lookup(ENV_DEBUG) {
            self.debug = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
        self
    }

    /// The scene to render.
    #[must_use]
    pub fn scene(&self) -> Scene {
        self.scene.clone().unwrap_or_else(Scene::initials)
    }

    /// The scene to render, as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn scene_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(&self.scene()).map_err(|e| Error::ConfigSerialize(e.to_string()))
    }
}

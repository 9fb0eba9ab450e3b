use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

const CONFIG_DIR: &str = ".config/livemark";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User settings for the live editor. Every field has a default, so a
/// partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Quiet period after the last edit before the preview is re-rendered.
    pub render_delay_ms: u64,
    /// Width applied to rendered images.
    pub image_width: u32,
    /// Whether the line-number gutter is shown.
    pub show_gutter: bool,
    /// Document opened when no file is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_document: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            render_delay_ms: 1000,
            image_width: 200,
            show_gutter: true,
            default_document: None,
        }
    }
}

impl Config {
    /// Reads settings from `config_path`. A missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::ConfigReadError {
                    config_path: config_path.to_path_buf(),
                    source,
                });
            }
        };

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config.default_document = config.default_document.map(|doc| Self::expand_path(&doc));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Writes pretty TOML, creating parent directories as needed.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let toml = toml::to_string_pretty(self).context("serializing config")?;
        std::fs::write(config_path, toml)
            .with_context(|| format!("writing {}", config_path.display()))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to_path(Self::config_path())
    }

    /// `~/.config/livemark/config.toml`, with the home directory expanded.
    pub fn config_path() -> PathBuf {
        let home = shellexpand::tilde("~");
        Path::new(home.as_ref()).join(CONFIG_DIR).join(CONFIG_FILE)
    }

    pub fn render_delay(&self) -> Duration {
        Duration::from_millis(self.render_delay_ms)
    }

    /// Expands `~` and `$VARS`. A path that cannot be expanded is kept as is.
    fn expand_path(path: &Path) -> PathBuf {
        shellexpand::full(&path.to_string_lossy())
            .map(|expanded| PathBuf::from(expanded.as_ref()))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

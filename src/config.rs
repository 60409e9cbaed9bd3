use std::{
    io,
    path::{Path, PathBuf},
};

use chrono::format::{Item, StrftimeItems};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed reading config: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Layout and formatting of the rendered preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CopyGetters, Getters)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// Edge length of the square visual, both for thumbnails and the fallback icon
    #[getset(get_copy = "pub")]
    thumbnail_size: u32,
    #[getset(get_copy = "pub")]
    frame_width: u32,
    #[getset(get_copy = "pub")]
    frame_height: u32,
    /// `chrono` format string for the created/modified timestamps
    #[getset(get = "pub")]
    date_format: String,
    /// Shown instead of the metadata report when the container can't be opened
    #[getset(get = "pub")]
    metadata_placeholder: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            thumbnail_size: 256,
            frame_width: 700,
            frame_height: 400,
            // Medium date, short time, e.g. "Mar 4, 2025 at 2:07 PM"
            date_format: "%b %-d, %Y at %-I:%M %p".to_owned(),
            metadata_placeholder: "Could not read metadata".to_owned(),
        }
    }
}

impl PreviewConfig {
    const APP_DIR: &str = "dotthz-preview";
    const FILE_NAME: &str = "config.toml";

    /// `<config dir>/dotthz-preview/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::APP_DIR).join(Self::FILE_NAME))
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let toml_str = std::fs::read_to_string(path)?;
        Self::from_toml_str(&toml_str)
    }

    /// Load `path`, or the default location if `None`.
    ///
    /// A missing file silently gives the defaults, a broken one gives the defaults and a warning.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            log::debug!("No config directory, using default config");
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::debug!("Loaded config from {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Ignoring config at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.thumbnail_size == 0 {
            return Err(ConfigError::Invalid(
                "thumbnail_size must be greater than 0".to_owned(),
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Invalid(format!(
                "date_format '{}' is not a valid strftime format",
                self.date_format
            )));
        }
        if self.frame_width < self.thumbnail_size || self.frame_height < self.thumbnail_size {
            return Err(ConfigError::Invalid(format!(
                "frame {}x{} can't fit a {} px thumbnail",
                self.frame_width, self.frame_height, self.thumbnail_size
            )));
        }
        Ok(())
    }

    pub fn with_thumbnail_size(mut self, size: u32) -> Self {
        self.thumbnail_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[test]
    fn test_defaults() {
        let config = PreviewConfig::default();
        assert_eq!(config.thumbnail_size(), 256);
        assert_eq!((config.frame_width(), config.frame_height()), (700, 400));
        assert_eq!(config.metadata_placeholder(), "Could not read metadata");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() -> TestResult {
        let config = PreviewConfig::from_toml_str("thumbnail_size = 128\n")?;
        assert_eq!(config.thumbnail_size(), 128);
        assert_eq!(config.frame_width(), 700);
        assert_eq!(config.date_format(), PreviewConfig::default().date_format());
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_and_invalid() {
        assert!(matches!(
            PreviewConfig::from_toml_str("thumbnail_sise = 128"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            PreviewConfig::from_toml_str("thumbnail_size = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            PreviewConfig::from_toml_str("thumbnail_size = 512"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_bad_date_format() -> TestResult {
        assert!(matches!(
            PreviewConfig::from_toml_str("date_format = \"%Q\"\n"),
            Err(ConfigError::Invalid(_))
        ));
        let config = PreviewConfig::from_toml_str("date_format = \"%Y-%m-%d %H:%M\"\n")?;
        assert_eq!(config.date_format(), "%Y-%m-%d %H:%M");

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "date_format = \"%Q\"\n")?;
        assert_eq!(
            PreviewConfig::load_or_default(Some(&path)),
            PreviewConfig::default()
        );
        Ok(())
    }

    #[test]
    fn test_load_or_default() -> TestResult {
        let dir = tempfile::tempdir()?;
        let missing = dir.path().join("missing.toml");
        assert_eq!(
            PreviewConfig::load_or_default(Some(&missing)),
            PreviewConfig::default()
        );

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "thumbnail_size = \"big\"")?;
        assert_eq!(
            PreviewConfig::load_or_default(Some(&broken)),
            PreviewConfig::default()
        );

        let good = dir.path().join("good.toml");
        std::fs::write(&good, "frame_width = 900\nmetadata_placeholder = \"n/a\"\n")?;
        let config = PreviewConfig::load_or_default(Some(&good));
        assert_eq!(config.frame_width(), 900);
        assert_eq!(config.metadata_placeholder(), "n/a");
        Ok(())
    }
}

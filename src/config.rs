use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::{
    compositor::BoundsPolicy,
    error::{ConfigError, Result},
    regions::FeatureKind,
};

/// Main configuration for face-replacer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the preset feature images live
    pub presets: PresetConfig,

    /// Pointer interaction settings
    pub interaction: InteractionConfig,

    /// Compositing settings
    pub composite: CompositeConfig,

    /// Output settings
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content)
            .map_err(|_| ConfigError::ParseFailed { path: path.display().to_string() })?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::InvalidValue {
                key: "config".to_string(),
                value: e.to_string()
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.presets.validate()?;
        self.interaction.validate()?;
        self.output.validate()?;
        Ok(())
    }
}

/// Preset image locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetConfig {
    /// Directory containing the preset files
    pub directory: PathBuf,

    /// File name of the left eye preset
    pub eye_left: String,

    /// File name of the right eye preset
    pub eye_right: String,

    /// File name of the mouth preset
    pub mouth: String,
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            eye_left: "preset_eye_left.png".to_string(),
            eye_right: "preset_eye_right.png".to_string(),
            mouth: "preset_mouth.png".to_string(),
        }
    }
}

impl PresetConfig {
    /// Full path of the preset file for a feature
    pub fn path_for(&self, kind: FeatureKind) -> PathBuf {
        let file = match kind {
            FeatureKind::EyeLeft => &self.eye_left,
            FeatureKind::EyeRight => &self.eye_right,
            FeatureKind::Mouth => &self.mouth,
        };
        self.directory.join(file)
    }

    fn validate(&self) -> Result<()> {
        for kind in FeatureKind::ALL {
            let path = self.path_for(kind);
            if path.file_name().is_none() {
                return Err(ConfigError::InvalidValue {
                    key: format!("presets.{}", kind),
                    value: path.display().to_string()
                }.into());
            }
        }
        Ok(())
    }
}

/// Pointer interaction configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Half-width in pixels of the square around a handle that counts as a hit
    pub handle_tolerance: i32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self { handle_tolerance: 8 }
    }
}

impl InteractionConfig {
    fn validate(&self) -> Result<()> {
        if self.handle_tolerance <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "interaction.handle_tolerance".to_string(),
                value: self.handle_tolerance.to_string()
            }.into());
        }
        Ok(())
    }
}

/// Compositing configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeConfig {
    /// What to do with regions that extend past the image edges
    pub bounds: BoundsPolicy,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default path of the composited image
    pub path: PathBuf,

    /// Longest side of the preview thumbnail
    pub preview_size: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("output.png"),
            preview_size: 400,
        }
    }
}

impl OutputConfig {
    fn validate(&self) -> Result<()> {
        if self.preview_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "output.preview_size".to_string(),
                value: self.preview_size.to_string()
            }.into());
        }

        if self.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "output.path".to_string(),
                value: String::new()
            }.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.interaction.handle_tolerance, 8);
        assert_eq!(config.output.path, PathBuf::from("output.png"));
        assert_eq!(config.composite.bounds, BoundsPolicy::Clip);
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let mut original_config = Config::default();
        original_config.composite.bounds = BoundsPolicy::Reject;
        original_config.presets.directory = PathBuf::from("assets");

        original_config.save_to_file(&file_path).unwrap();
        let loaded_config = Config::from_file(&file_path).unwrap();

        assert_eq!(loaded_config.composite.bounds, BoundsPolicy::Reject);
        assert_eq!(loaded_config.presets.directory, PathBuf::from("assets"));
        assert_eq!(loaded_config.output.preview_size, 400);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("[interaction]\nhandle_tolerance = 12\n").unwrap();
        assert_eq!(config.interaction.handle_tolerance, 12);
        assert_eq!(config.presets.mouth, "preset_mouth.png");
    }

    #[test]
    fn test_preset_paths() {
        let mut config = PresetConfig::default();
        config.directory = PathBuf::from("assets");
        assert_eq!(
            config.path_for(FeatureKind::EyeRight),
            PathBuf::from("assets").join("preset_eye_right.png")
        );
    }

    #[test]
    fn test_invalid_handle_tolerance() {
        let mut config = Config::default();
        config.interaction.handle_tolerance = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_preview_size_rejected() {
        let mut config = Config::default();
        config.output.preview_size = 0;
        match config.validate() {
            Err(crate::error::ReplacerError::Config(ConfigError::InvalidValue { key, value })) => {
                assert_eq!(key, "output.preview_size");
                assert_eq!(value, "0");
            }
            other => panic!("expected invalid preview size, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_output_path_rejected() {
        let mut config = Config::default();
        config.output.path = PathBuf::new();
        assert!(matches!(
            config.validate(),
            Err(crate::error::ReplacerError::Config(ConfigError::InvalidValue { ref key, .. })) if key == "output.path"
        ));
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempdir().unwrap();
        let result = Config::from_file(dir.path().join("nope.toml"));
        assert!(matches!(
            result,
            Err(crate::error::ReplacerError::Config(ConfigError::FileNotFound { .. }))
        ));
    }
}

use thiserror::Error;

/// Main error type for the face-replacer library
#[derive(Error, Debug)]
pub enum ReplacerError {
    #[error("Preset error: {0}")]
    Preset(#[from] PresetError),

    #[error("Photo error: {0}")]
    Photo(#[from] PhotoError),

    #[error("Composite error: {0}")]
    Composite(#[from] CompositeError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Preset loading errors. All of these abort startup.
#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Preset image for {feature} not found: {path}")]
    Missing { feature: String, path: String },

    #[error("Failed to load preset image {path}: {reason}")]
    LoadFailed { path: String, reason: String },
}

/// Errors reading or writing photos
#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("Failed to load image {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    #[error("Failed to save image {path}: {reason}")]
    SaveFailed { path: String, reason: String },
}

/// Compositing errors
#[derive(Error, Debug)]
pub enum CompositeError {
    #[error("Region {region} at ({x}, {y}) size {width}x{height} exceeds image bounds {image_width}x{image_height}")]
    OutOfBounds {
        region: String,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        image_width: u32,
        image_height: u32,
    },
}

/// Errors raised by the editing session
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No image has been loaded")]
    NoImage,

    #[error("No composited result is available")]
    NoResult,

    #[error("Failed to parse gesture script {path}: {reason}")]
    ScriptParseFailed { path: String, reason: String },
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path}")]
    ParseFailed { path: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Convenience type alias for Results using ReplacerError
pub type Result<T> = std::result::Result<T, ReplacerError>;

impl ReplacerError {
    /// Whether the error must end the program rather than be shown to the user
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Preset(_) | Self::Config(_))
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Preset(PresetError::Missing { path, .. }) => {
                format!("Preset image '{}' is missing. Place the preset PNG files next to the program or pass --presets.", path)
            }
            Self::Photo(PhotoError::LoadFailed { path, .. }) => {
                format!("Could not load image '{}'. Please check the file exists and is a PNG, JPEG, BMP or GIF.", path)
            }
            Self::Session(SessionError::NoImage) => {
                "Please select an image first.".to_string()
            }
            Self::Session(SessionError::NoResult) => {
                "There is no result to save yet.".to_string()
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            _ => self.to_string(),
        }
    }
}

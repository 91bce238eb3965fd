use super::error::ApplicationError;
use crate::infrastructure::error::InfrastructureError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_IMAGE_SIZE: u32 = 224;
pub const DEFAULT_MAX_ZOOM_PIXELS: u32 = 10;

/// Settings for loading and augmenting dataset images.
///
/// Every field has a default, so a JSON file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AugmentConfig {
    /// Directory the dataset's `path` column is relative to.
    pub root_path: PathBuf,
    /// Side length of the square zoom output.
    pub image_size: u32,
    /// Upper bound of the per-side zoom, at most `image_size`.
    pub max_zoom_pixels: u32,
    pub brightness_min: f32,
    pub brightness_max: f32,
}

impl Default for AugmentConfig {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("./"),
            image_size: DEFAULT_IMAGE_SIZE,
            max_zoom_pixels: DEFAULT_MAX_ZOOM_PIXELS,
            brightness_min: 0.3,
            brightness_max: 1.0,
        }
    }
}

impl AugmentConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ApplicationError> {
        let config: Self = serde_json::from_str(json).map_err(InfrastructureError::JsonError)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ApplicationError> {
        let text = std::fs::read_to_string(path).map_err(InfrastructureError::IoError)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.image_size == 0 {
            return Err(ApplicationError::ConfigurationError(
                "image_size must be greater than zero".to_string(),
            ));
        }
        if self.max_zoom_pixels > self.image_size {
            return Err(ApplicationError::ConfigurationError(format!(
                "max_zoom_pixels {} must not exceed image_size {}",
                self.max_zoom_pixels, self.image_size
            )));
        }
        let (min, max) = (self.brightness_min, self.brightness_max);
        if !(min > 0.0 && min < max && max <= 1.0) {
            return Err(ApplicationError::ConfigurationError(format!(
                "brightness range [{}, {}) must satisfy 0 < min < max <= 1",
                min, max
            )));
        }
        Ok(())
    }
}

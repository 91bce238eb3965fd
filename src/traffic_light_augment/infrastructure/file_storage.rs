use super::error::InfrastructureError;
use crate::domain::image::Image;
use crate::domain::image_loader_trait::ImageLoader;
use std::path::Path;

// ローカルファイルシステム上の画像の読み書き
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }

    /// Writes the image, picking the encoding from the file extension.
    pub fn save_image(&self, path: &Path, image: &Image) -> Result<(), InfrastructureError> {
        image
            .save(path)
            .map_err(|source| InfrastructureError::ImageSave {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl ImageLoader for LocalFileStorage {
    fn load_image(&self, path: &Path) -> Result<Image, InfrastructureError> {
        let image = image::open(path).map_err(|source| InfrastructureError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(image.to_rgb8())
    }
}

use std::path::Path;

use crate::domain::image::Image;
use crate::infrastructure::error::InfrastructureError;

#[cfg(test)]
use mockall::automock;

// 画像の読み込み元。テストではモックに差し替える
#[cfg_attr(test, automock)]
pub trait ImageLoader {
    fn load_image(&self, path: &Path) -> Result<Image, InfrastructureError>;
}

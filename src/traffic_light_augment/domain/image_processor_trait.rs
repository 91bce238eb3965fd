use crate::domain::error::DomainError;
use crate::domain::image::Image;

// 乱数は呼び出し側で引き、ここでは決定的な変換だけを行う
pub trait ImageProcessor {
    /// Scales the HSV value channel of every pixel by `factor`.
    fn adjust_brightness(&self, image: &Image, factor: f32) -> Image;

    fn flip_horizontal(&self, image: &Image) -> Image;

    /// Enlarges the image by `zoom_pixels` on each side and crops the centered
    /// `size x size` window.
    fn zoom_and_crop(&self, image: &Image, zoom_pixels: u32, size: u32)
        -> Result<Image, DomainError>;
}

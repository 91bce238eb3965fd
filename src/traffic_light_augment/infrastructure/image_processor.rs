use crate::domain::color::Hsv;
use crate::domain::error::DomainError;
use crate::domain::image::Image;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::zoom::ZoomGeometry;
use image::imageops::{self, FilterType};
use imageproc::map::map_colors;

// image / imageproc クレートによる ImageProcessor の実装
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultImageProcessor;

impl DefaultImageProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl ImageProcessor for DefaultImageProcessor {
    fn adjust_brightness(&self, image: &Image, factor: f32) -> Image {
        map_colors(image, |pixel| Hsv::from_rgb(pixel).scale_value(factor).to_rgb())
    }

    fn flip_horizontal(&self, image: &Image) -> Image {
        imageops::flip_horizontal(image)
    }

    fn zoom_and_crop(
        &self,
        image: &Image,
        zoom_pixels: u32,
        size: u32,
    ) -> Result<Image, DomainError> {
        let geometry = ZoomGeometry::compute(image.width(), image.height(), zoom_pixels, size)?;
        log::trace!("zoom geometry: {:?}", geometry);

        // Triangle は線形補間
        let resized = if (geometry.resized_width, geometry.resized_height) == image.dimensions() {
            image.clone()
        } else {
            imageops::resize(
                image,
                geometry.resized_width,
                geometry.resized_height,
                FilterType::Triangle,
            )
        };

        Ok(imageops::crop_imm(
            &resized,
            geometry.left_crop,
            geometry.top_crop,
            geometry.size,
            geometry.size,
        )
        .to_image())
    }
}

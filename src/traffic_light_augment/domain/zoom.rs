use crate::domain::error::DomainError;

/// Where the zoomed image lands and which window of it is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomGeometry {
    pub zoom_factor: f64,
    pub resized_width: u32,
    pub resized_height: u32,
    pub top_crop: u32,
    pub left_crop: u32,
    pub size: u32,
}

impl ZoomGeometry {
    /// `zoom_pixels` is the number of pixels added on each side of a `size` wide image,
    /// hence `zoom_factor = 1 + 2 * zoom_pixels / size`. At most `size` pixels may be added.
    pub fn compute(
        width: u32,
        height: u32,
        zoom_pixels: u32,
        size: u32,
    ) -> Result<Self, DomainError> {
        if size == 0 {
            return Err(DomainError::InvalidInput(
                "image_size must be greater than zero".to_string(),
            ));
        }
        if zoom_pixels > size {
            return Err(DomainError::InvalidInput(format!(
                "zoom of {} pixels exceeds image_size {}",
                zoom_pixels, size
            )));
        }

        let zoom_factor = 1.0 + 2.0 * f64::from(zoom_pixels) / f64::from(size);
        let resized_width = (f64::from(width) * zoom_factor).round() as u32;
        let resized_height = (f64::from(height) * zoom_factor).round() as u32;

        if resized_width < size || resized_height < size {
            return Err(DomainError::CropOutOfBounds {
                width: resized_width,
                height: resized_height,
                size,
            });
        }

        Ok(Self {
            zoom_factor,
            resized_width,
            resized_height,
            top_crop: (resized_height - size) / 2,
            left_crop: (resized_width - size) / 2,
            size,
        })
    }
}

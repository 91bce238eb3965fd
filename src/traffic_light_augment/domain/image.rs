use image::RgbImage;

/// 3チャンネル 8bit の画像。ピクセルバッファ以外の同一性は持たない
pub type Image = RgbImage;

/// An image paired with the class label of the row it was loaded from.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledImage {
    pub image: Image,
    pub label: String,
}

impl LabeledImage {
    pub fn new(image: Image, label: String) -> Self {
        Self { image, label }
    }

    pub fn into_pair(self) -> (Image, String) {
        (self.image, self.label)
    }
}

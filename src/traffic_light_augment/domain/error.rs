use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Row index {index} is out of range for a dataset of {len} rows")]
    RowOutOfRange { index: usize, len: usize },

    // 拡大後の画像が image_size に満たない場合は切り抜けない
    #[error("Cannot crop {size}x{size} from a {width}x{height} image")]
    CropOutOfBounds { width: u32, height: u32, size: u32 },
}

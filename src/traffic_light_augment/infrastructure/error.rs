use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Failed to load image '{}'", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to save image '{}'", .path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to read dataset '{}'", .path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Underlying I/O error")]
    IoError(#[from] std::io::Error),

    #[error("CSV error")]
    CsvError(#[from] csv::Error),

    #[error("JSON error")]
    JsonError(#[from] serde_json::Error),
}

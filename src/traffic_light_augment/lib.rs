//! Random brightness / flip / zoom augmentation for a traffic-light classification dataset.

pub mod domain {
    pub mod augmentation_decision;
    pub mod color;
    pub mod dataset;
    pub mod error;
    pub mod image;
    pub mod image_loader_trait;
    pub mod image_processor_trait;
    pub mod random_source;
    pub mod zoom;
}

pub mod application {
    pub mod augment_service;
    pub mod config;
    pub mod error;
}

pub mod infrastructure {
    pub mod dataset_reader;
    pub mod error;
    pub mod file_storage;
    pub mod image_processor;
    pub mod random_source;
}

pub use application::augment_service::AugmentService;
pub use application::config::AugmentConfig;
pub use application::error::ApplicationError;
pub use domain::dataset::{Dataset, DatasetRow};
pub use domain::image::{Image, LabeledImage};

use std::sync::Arc;
use super::config::AugmentConfig;
use super::error::ApplicationError;

use crate::domain::augmentation_decision::AugmentationDecision;
use crate::domain::dataset::Dataset;
use crate::domain::image::{Image, LabeledImage};
use crate::domain::image_loader_trait::ImageLoader;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::random_source::RandomSource;

/// Loads dataset rows and applies the random brightness / flip / zoom augmentations.
pub struct AugmentService {
    image_processor: Arc<dyn ImageProcessor + Send + Sync>, // トレイトオブジェクトとして保持
    image_loader: Arc<dyn ImageLoader + Send + Sync>,
    config: AugmentConfig,
}

impl AugmentService {
    /// Fails with `ConfigurationError` unless `config` passes `AugmentConfig::validate`.
    pub fn new(
        image_processor: Arc<dyn ImageProcessor + Send + Sync>,
        image_loader: Arc<dyn ImageLoader + Send + Sync>,
        config: AugmentConfig,
    ) -> Result<Self, ApplicationError> {
        config.validate()?;
        Ok(Self {
            image_processor,
            image_loader,
            config,
        })
    }

    pub fn random_brightness(&self, image: &Image, rng: &mut dyn RandomSource) -> Image {
        let factor = rng.uniform(self.config.brightness_min, self.config.brightness_max);
        log::trace!("brightness factor: {}", factor);
        self.image_processor.adjust_brightness(image, factor)
    }

    pub fn random_zoom(
        &self,
        image: &Image,
        rng: &mut dyn RandomSource,
    ) -> Result<Image, ApplicationError> {
        let zoom_pixels = rng.int_inclusive(0, self.config.max_zoom_pixels);
        log::trace!("zoom pixels: {}", zoom_pixels);
        let zoomed = self
            .image_processor
            .zoom_and_crop(image, zoom_pixels, self.config.image_size)?;
        Ok(zoomed)
    }

    /// Applies brightness, flip and zoom, in that order, for each step the decision enables.
    pub fn augment(
        &self,
        mut image: Image,
        decision: AugmentationDecision,
        rng: &mut dyn RandomSource,
    ) -> Result<Image, ApplicationError> {
        if decision.brightness {
            image = self.random_brightness(&image, rng);
        }
        if decision.flip {
            image = self.image_processor.flip_horizontal(&image);
        }
        if decision.zoom {
            image = self.random_zoom(&image, rng)?;
        }
        Ok(image)
    }

    /// Loads the image of row `index` and pairs it with the row's class.
    ///
    /// The three coin flips are drawn on every call, so `rng` advances the same
    /// way whether or not `should_augment` is set.
    pub fn get_image(
        &self,
        index: usize,
        dataset: &Dataset,
        should_augment: bool,
        rng: &mut dyn RandomSource,
    ) -> Result<LabeledImage, ApplicationError> {
        let row = dataset.row(index)?;
        let path = row.resolve(&self.config.root_path);
        log::debug!("loading row {} from {}", index, path.display());

        let image = self.image_loader.load_image(&path)?;
        let label = row.class.clone();

        let decision = AugmentationDecision::draw(rng);
        let image = if should_augment {
            log::debug!("row {} augmentation: {:?}", index, decision);
            self.augment(image, decision, rng)?
        } else {
            image
        };

        Ok(LabeledImage::new(image, label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::DatasetRow;
    use crate::domain::error::DomainError;
    use crate::domain::image_loader_trait::MockImageLoader;
    use crate::domain::random_source::MockRandomSource;
    use crate::infrastructure::error::InfrastructureError;
    use crate::infrastructure::image_processor::DefaultImageProcessor;
    use crate::infrastructure::random_source::StdRandomSource;
    use image::Rgb;
    use mockall::predicate::eq;
    use std::path::Path;

    fn gradient(width: u32, height: u32) -> Image {
        Image::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x * 3 + y) % 256) as u8])
        })
    }

    fn sample_dataset() -> Dataset {
        Dataset::new(vec![
            DatasetRow::new("imgs/sample.jpg", "red"),
            DatasetRow::new(" imgs/second.jpg\t", "green"),
        ])
    }

    fn loader_returning(expected: &'static str, image: Image) -> MockImageLoader {
        let mut loader = MockImageLoader::new();
        loader
            .expect_load_image()
            .withf(move |path: &Path| path == Path::new(expected))
            .times(1)
            .returning(move |_| Ok(image.clone()));
        loader
    }

    fn flips(outcomes: [bool; 3]) -> MockRandomSource {
        let mut rng = MockRandomSource::new();
        let mut seq = mockall::Sequence::new();
        for outcome in outcomes {
            rng.expect_coin_flip()
                .times(1)
                .in_sequence(&mut seq)
                .return_const(outcome);
        }
        rng
    }

    fn service(loader: MockImageLoader) -> AugmentService {
        AugmentService::new(
            Arc::new(DefaultImageProcessor::new()),
            Arc::new(loader),
            AugmentConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_get_image_without_augmentation_returns_loaded_image() {
        let image = gradient(240, 260);
        let service = service(loader_returning("./imgs/sample.jpg", image.clone()));
        // 無効時もコインは引かれるが、変換は行われない
        let mut rng = flips([true, true, true]);

        let result = service.get_image(0, &sample_dataset(), false, &mut rng).unwrap();
        assert_eq!(result.into_pair(), (image, "red".to_string()));
    }

    #[test]
    fn test_get_image_trims_path_before_loading() {
        let image = gradient(8, 8);
        let service = service(loader_returning("./imgs/second.jpg", image.clone()));
        let mut rng = flips([false, false, false]);

        let result = service.get_image(1, &sample_dataset(), false, &mut rng).unwrap();
        assert_eq!(result.label, "green");
        assert_eq!(result.image, image);
    }

    #[test]
    fn test_all_flips_zero_leaves_image_untouched() {
        let image = gradient(300, 250);
        let service = service(loader_returning("./imgs/sample.jpg", image.clone()));
        let mut rng = flips([false, false, false]);

        let result = service.get_image(0, &sample_dataset(), true, &mut rng).unwrap();
        assert_eq!(result.image, image);
        assert_eq!(result.label, "red");
    }

    #[test]
    fn test_flip_only() {
        let image = gradient(31, 17);
        let service = service(loader_returning("./imgs/sample.jpg", image.clone()));
        let mut rng = flips([false, true, false]);

        let result = service.get_image(0, &sample_dataset(), true, &mut rng).unwrap();
        assert_eq!(result.image, DefaultImageProcessor::new().flip_horizontal(&image));
    }

    #[test]
    fn test_all_augmentations_applied_in_order() {
        let image = gradient(300, 250);
        let service = service(loader_returning("./imgs/sample.jpg", image.clone()));
        let mut rng = flips([true, true, true]);
        rng.expect_uniform()
            .with(eq(0.3f32), eq(1.0f32))
            .times(1)
            .return_const(0.5f32);
        rng.expect_int_inclusive()
            .with(eq(0u32), eq(10u32))
            .times(1)
            .return_const(7u32);

        let result = service.get_image(0, &sample_dataset(), true, &mut rng).unwrap();

        let processor = DefaultImageProcessor::new();
        let expected = processor
            .zoom_and_crop(
                &processor.flip_horizontal(&processor.adjust_brightness(&image, 0.5)),
                7,
                224,
            )
            .unwrap();
        assert_eq!(result.image.dimensions(), (224, 224));
        assert_eq!(result.image, expected);
        assert_eq!(result.label, "red");
    }

    #[test]
    fn test_zoom_on_small_image_fails() {
        let service = service(loader_returning("./imgs/sample.jpg", gradient(100, 100)));
        let mut rng = flips([false, false, true]);
        rng.expect_int_inclusive().return_const(0u32);

        match service.get_image(0, &sample_dataset(), true, &mut rng) {
            Err(ApplicationError::DomainError(DomainError::CropOutOfBounds { size, .. })) => {
                assert_eq!(size, 224)
            }
            other => panic!("Expected CropOutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_row_out_of_range_does_not_load() {
        let mut loader = MockImageLoader::new();
        loader.expect_load_image().never();
        let service = service(loader);
        let mut rng = MockRandomSource::new();

        match service.get_image(5, &sample_dataset(), true, &mut rng) {
            Err(ApplicationError::DomainError(DomainError::RowOutOfRange { index, len })) => {
                assert_eq!((index, len), (5, 2));
            }
            other => panic!("Expected RowOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_load_failure_propagates() {
        let mut loader = MockImageLoader::new();
        loader.expect_load_image().returning(|_| {
            Err(InfrastructureError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "missing",
            )))
        });
        let service = service(loader);
        let mut rng = MockRandomSource::new();

        assert!(matches!(
            service.get_image(0, &sample_dataset(), true, &mut rng),
            Err(ApplicationError::InfrastructureError(InfrastructureError::IoError(_)))
        ));
    }

    #[test]
    fn test_same_seed_gives_same_augmentation() {
        let image = gradient(256, 256);
        let mut loader = MockImageLoader::new();
        loader
            .expect_load_image()
            .times(2)
            .returning(move |_| Ok(image.clone()));
        let service = service(loader);
        let dataset = sample_dataset();

        let first = service
            .get_image(0, &dataset, true, &mut StdRandomSource::seeded(3))
            .unwrap();
        let second = service
            .get_image(0, &dataset, true, &mut StdRandomSource::seeded(3))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_end_to_end_with_files_on_disk() {
        use crate::infrastructure::file_storage::LocalFileStorage;

        let root = std::env::temp_dir().join(format!(
            "traffic_light_augment_e2e_{}",
            std::process::id()
        ));
        std::fs::create_dir_all(root.join("imgs")).unwrap();
        let storage = LocalFileStorage::new();
        storage
            .save_image(&root.join("imgs/sample.jpg"), &gradient(230, 230))
            .unwrap();

        let config = AugmentConfig {
            root_path: root.clone(),
            ..AugmentConfig::default()
        };
        let service = AugmentService::new(
            Arc::new(DefaultImageProcessor::new()),
            Arc::new(storage),
            config,
        )
        .unwrap();
        let dataset = Dataset::new(vec![DatasetRow::new("imgs/sample.jpg", "red")]);

        let result = service
            .get_image(0, &dataset, false, &mut StdRandomSource::seeded(0))
            .unwrap();
        let reloaded = storage.load_image(&root.join("imgs/sample.jpg")).unwrap();
        let _ = std::fs::remove_dir_all(&root);

        assert_eq!(result.into_pair(), (reloaded, "red".to_string()));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        for config in [
            AugmentConfig {
                brightness_min: 0.9,
                brightness_max: 0.9,
                ..AugmentConfig::default()
            },
            AugmentConfig {
                max_zoom_pixels: 3_000_000_000,
                ..AugmentConfig::default()
            },
        ] {
            let mut loader = MockImageLoader::new();
            loader.expect_load_image().never();
            let result = AugmentService::new(
                Arc::new(DefaultImageProcessor::new()),
                Arc::new(loader),
                config,
            );
            match result {
                Err(ApplicationError::ConfigurationError(_)) => {}
                Err(other) => panic!("Expected ConfigurationError, got {:?}", other),
                Ok(_) => panic!("Expected ConfigurationError, got a service"),
            }
        }
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use traffic_light_augment::infrastructure::dataset_reader::load_dataset;
use traffic_light_augment::infrastructure::file_storage::LocalFileStorage;
use traffic_light_augment::infrastructure::image_processor::DefaultImageProcessor;
use traffic_light_augment::infrastructure::random_source::StdRandomSource;
use traffic_light_augment::{AugmentConfig, AugmentService};

/// Augment one row of a traffic-light dataset and write the result to disk.
#[derive(Debug, Clone, Parser)]
struct Opts {
    /// CSV label file with `path` and `class` columns
    #[clap(long)]
    labels: PathBuf,
    /// row index in the label file
    #[clap(long, default_value = "0")]
    index: usize,
    /// output image file, encoding follows the extension
    #[clap(long)]
    output: PathBuf,
    /// apply random augmentation
    #[clap(long)]
    augment: bool,
    /// seed for a reproducible augmentation
    #[clap(long)]
    seed: Option<u64>,
    /// JSON configuration file
    #[clap(long)]
    config: Option<PathBuf>,
    /// dataset root directory, overrides the configuration
    #[clap(long)]
    root: Option<PathBuf>,
    /// output size of the zoom step, overrides the configuration
    #[clap(long)]
    image_size: Option<u32>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();
    let opts = Opts::parse();

    let mut config = match &opts.config {
        Some(path) => AugmentConfig::load(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => AugmentConfig::default(),
    };
    if let Some(root) = opts.root {
        config.root_path = root;
    }
    if let Some(image_size) = opts.image_size {
        config.image_size = image_size;
    }

    let dataset = load_dataset(&opts.labels)
        .with_context(|| format!("failed to read labels '{}'", opts.labels.display()))?;
    log::info!("loaded {} rows from {}", dataset.len(), opts.labels.display());

    let storage = Arc::new(LocalFileStorage::new());
    let service = AugmentService::new(
        Arc::new(DefaultImageProcessor::new()),
        storage.clone(),
        config,
    )?;

    let mut rng = match opts.seed {
        Some(seed) => StdRandomSource::seeded(seed),
        None => StdRandomSource::from_entropy(),
    };

    let (image, label) = service
        .get_image(opts.index, &dataset, opts.augment, &mut rng)?
        .into_pair();
    storage.save_image(&opts.output, &image)?;

    log::info!(
        "row {} ({}) -> {} [{}x{}]",
        opts.index,
        label,
        opts.output.display(),
        image.width(),
        image.height()
    );
    println!("{}", label);

    Ok(())
}

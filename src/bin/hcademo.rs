//! hcademo Binary
//!
//! Stages simulated datasets in a local blob store and looks samples up in
//! the resulting index.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hcademo::generator::rng_from_config;
use hcademo::store::FsStore;
use hcademo::{Config, DatasetShape, Generator, SampleIndex};
use tracing_subscriber::{fmt, EnvFilter};

/// hcademo
#[derive(Parser, Debug)]
#[command(name = "hcademo")]
#[command(about = "Stage simulated gene/cell matrices and a sample index in a blob store")]
#[command(version)]
struct Args {
    /// Blob store root directory
    #[arg(short, long, default_value = "./hcademo_data")]
    data_dir: PathBuf,

    /// Storage key namespace
    #[arg(short, long, default_value = "hca")]
    namespace: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate partitions and publish the sample index
    Generate {
        /// The number of datasets to create
        #[arg(allow_hyphen_values = true)]
        datasets_count: i64,

        /// The number of samples per dataset
        #[arg(allow_hyphen_values = true)]
        samples_count: i64,

        /// The number of features
        #[arg(allow_hyphen_values = true)]
        features_count: i64,

        /// Worker threads building partitions
        #[arg(short, long, default_value = "1")]
        workers: usize,

        /// Seed for reproducible values
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print the storage key of the partition holding a sample
    Locate {
        /// Sample id, e.g. SMPL00000042
        sample_id: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hcademo=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("hcademo v{}", hcademo::VERSION);
    tracing::info!("Data directory: {}", args.data_dir.display());

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> hcademo::Result<()> {
    let mut builder = Config::builder()
        .data_dir(&args.data_dir)
        .namespace(&args.namespace);

    match args.command {
        Commands::Generate {
            datasets_count,
            samples_count,
            features_count,
            workers,
            seed,
        } => {
            // Reject bad counts before touching storage
            let shape = DatasetShape::new(datasets_count, samples_count, features_count)?;

            builder = builder.workers(workers);
            if let Some(seed) = seed {
                builder = builder.seed(seed);
            }
            let config = builder.build();
            config.validate()?;

            let store = FsStore::open(&config.data_dir)?;
            let mut rng = rng_from_config(&config);
            let generator = Generator::new(store, config)?;
            let report = generator.generate(shape, &mut rng)?;

            for key in &report.keys {
                println!("{}", key);
            }
            tracing::info!(
                "{} partitions, {} samples, index at {}/{}",
                report.keys.len(),
                report.total_samples,
                report.index_container,
                report.index_object
            );
        }
        Commands::Locate { sample_id } => {
            let config = builder.build();
            config.validate()?;
            let store = FsStore::open(&config.data_dir)?;
            let index = SampleIndex::load(&store, &config)?;
            let key = index
                .locate(&sample_id)
                .ok_or_else(|| hcademo::DemoError::SampleNotFound(sample_id.clone()))?;
            println!("{}", key);
        }
    }

    Ok(())
}

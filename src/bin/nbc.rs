//! NBC command-line clustering.
//!
//! ## Usage
//!
//! ```bash
//! # Brute-force neighbourhoods, k = 5
//! cargo run --release --bin nbc -- --path data.csv
//!
//! # Triangle-inequality search, reference point = per-dimension minimum
//! cargo run --release --bin nbc -- --path data.csv -k 10 --use-ti -o clusters.csv
//!
//! # Triangle-inequality search with an explicit reference point
//! cargo run --release --bin nbc -- --path data.csv --use-ti -r=-1,-1
//! ```
//!
//! The output file holds one cluster id per input row, `-1` for noise.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use nbclust::{dataset, Nbc};

/// Neighbourhood-Based Clustering of a comma-separated dataset.
#[derive(Parser, Debug)]
#[command(name = "nbc")]
#[command(about = "Cluster a comma-separated dataset with NBC")]
struct Args {
    /// Nearest neighbours count.
    #[arg(short = 'k', long, default_value_t = 5)]
    k: usize,

    /// Path to the dataset (comma-separated, no header).
    #[arg(short = 'p', long)]
    path: PathBuf,

    /// Use the triangle-inequality accelerated neighbourhood search.
    #[arg(long)]
    use_ti: bool,

    /// Reference point for the accelerated search; defaults to the per-dimension minimum.
    #[arg(short = 'r', long, value_delimiter = ',', allow_hyphen_values = true)]
    reference_point: Vec<f32>,

    /// Output path for the cluster ids.
    #[arg(short = 'o', long, default_value = "clusters.csv")]
    output_path: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if !args.use_ti && !args.reference_point.is_empty() {
        bail!("--reference-point requires --use-ti");
    }

    let data = dataset::load_points(&args.path)
        .with_context(|| format!("failed to load dataset {}", args.path.display()))?;
    info!("loaded {} points from {}", data.len(), args.path.display());

    let nbc = match (args.use_ti, args.reference_point.is_empty()) {
        (false, _) => Nbc::new(args.k),
        (true, true) => Nbc::new(args.k).with_minimum_reference(),
        (true, false) => Nbc::new(args.k).with_reference_point(args.reference_point),
    };

    let start = Instant::now();
    let nb = nbc.neighbourhood(&data).context("neighbourhood computation failed")?;
    info!(
        "k-neighbourhood ({}) in {:.2?}: {} distance evaluations",
        if args.use_ti { "triangle inequality" } else { "brute force" },
        start.elapsed(),
        nb.distance_evaluations()
    );

    let assignment = nbclust::cluster::cluster_neighbourhood(&nb).context("clustering failed")?;
    info!(
        "{} clusters, {} noise points",
        assignment.n_clusters(),
        assignment.noise().len()
    );

    dataset::save_assignment(&args.output_path, &assignment)
        .with_context(|| format!("failed to write {}", args.output_path.display()))?;
    info!("wrote {}", args.output_path.display());
    Ok(())
}

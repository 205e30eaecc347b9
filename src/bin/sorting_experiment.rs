//! Times counting sort and BCI sort on sorted, shuffled and reversed inputs.
//!
//! Run (example):
//!   cargo run --release --bin sorting-experiment -- --sizes 500,5000 --seed 42
//!   cargo run --release --bin sorting-experiment -- --input numbers.txt

use bcisort::dataset::{DatasetKind, load_dataset};
use bcisort::measure::{Measurement, TrackingAllocator, measure};
use bcisort::prelude::*;
use clap::Parser;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::path::PathBuf;

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

#[derive(Debug, Parser)]
#[command(name = "sorting-experiment", about = "Compare counting sort and BCI sort")]
struct Args {
    /// Dataset sizes to generate.
    #[arg(long, value_delimiter = ',', default_values_t = [500, 5000, 50000])]
    sizes: Vec<usize>,

    /// Read newline-delimited integers from a file instead of generating data.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Seed for the shuffled dataset.
    #[arg(long)]
    seed: Option<u64>,
}

fn run_counting(data: &[i64], label: &str) -> Result<Measurement, SortError> {
    let (result, m) = measure(format!("Counting Sort on {label}"), || counting_sort(data));
    result?;
    Ok(m)
}

fn run_bci(data: &[i64], label: &str) -> Result<Measurement, SortError> {
    let mut copy = data.to_vec();
    let right = copy.len().saturating_sub(1);
    let (result, m) = measure(format!("BCI Sort on {label}"), || {
        bci_sort(&mut copy, 0, right)
    });
    result?;
    debug_assert!(copy.windows(2).all(|w| w[0] <= w[1]));
    Ok(m)
}

fn report(data: &[i64], label: &str) -> Result<(), Box<dyn Error>> {
    if data.iter().any(|&v| v < 0) {
        warn!("{label}: negative keys present, skipping counting sort");
    } else if !data.is_empty() {
        println!("{}", run_counting(data, label)?);
    }
    println!("{}", run_bci(data, label)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(path) = &args.input {
        let data = load_dataset(path)?;
        info!("loaded {} values from {}", data.len(), path.display());
        println!("Dataset Size: {}", data.len());
        report(&data, "file data")?;
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("shuffle seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    for &size in &args.sizes {
        println!("Dataset Size: {size}");
        for kind in DatasetKind::ALL {
            let data = kind.generate(size, &mut rng);
            report(&data, &format!("{kind} data"))?;
            println!();
        }
    }

    Ok(())
}

// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end: lay out one instance file.
//!
//! ```text
//! sandwich family.json --max-width 3
//! ```
//!
//! Prints one interval per line in placement order. Log output goes to
//! stderr and is controlled by `RUST_LOG` (default `info`).

use anyhow::{bail, Context, Result};
use clap::Parser;
use pedigree_sandwich::engine::Counters;
use pedigree_sandwich::{InstanceFile, SandwichSolver, SolverConfig, MAX_ITERATIONS};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "sandwich")]
#[command(about = "Find an interval layout for a pedigree sandwich instance")]
struct Args {
    /// Instance file (JSON with vertices, required and forbidden edges)
    instance: PathBuf,

    /// Refuse placements that leave this many vertices active
    #[arg(long, default_value_t = 3)]
    max_width: usize,

    /// Pop limit of each search
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    max_iterations: usize,

    /// Do not remove forbidden edges when the instance has no layout
    #[arg(long)]
    no_relax: bool,

    /// Remove at most this many forbidden edges at once
    #[arg(long)]
    max_removed_edges: Option<usize>,

    /// Log every relaxation attempt
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> SolverConfig {
        SolverConfig::default()
            .with_max_width(self.max_width)
            .with_max_iterations(self.max_iterations)
            .with_relaxation(!self.no_relax)
            .with_max_removed_edges(self.max_removed_edges)
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    let start_time = Instant::now();

    let instance = InstanceFile::load(&args.instance)
        .and_then(InstanceFile::into_instance)
        .with_context(|| format!("Could not load {}", args.instance.display()))?;
    info!(
        "Instance has {} vertices, {} required and {} forbidden edges",
        instance.len(),
        instance.required_graph().edge_count(),
        instance.forbidden_graph().edge_count()
    );

    let mut solver = SandwichSolver::new(args.config());
    let solution = solver.solve(&instance);

    let statistics = solver.statistics();
    info!(
        "Searched {} instances, {} iterations, {} rejected placements",
        statistics.get(Counters::Searches),
        statistics.get(Counters::Iterations),
        statistics.total_rejections()
    );

    let Some(solution) = solution else {
        bail!("No layout found for {}", args.instance.display());
    };

    for (a, b) in &solution.removed_edges {
        info!("Removed forbidden edge ({}, {})", a, b);
    }
    for interval in &solution.intervals {
        println!("{}", interval);
    }

    let seconds = start_time.elapsed().as_secs_f64();
    info!("Used {:.3} seconds", seconds);

    Ok(())
}

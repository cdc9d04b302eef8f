//! panama-traces — one synthetic commute day for Panama City.
//!
//! Every user gets a home point in a residential cluster and a job point in
//! the business district, stays near home at night, commutes in the morning
//! and evening windows, and stays near work in between.  Positions are
//! sampled every 10 minutes by default and written as CSV (or SQLite /
//! Parquet with the matching feature).
//!
//! ```text
//! panama-traces --users 1000 --date 2023-03-06 --format parquet
//! RUST_LOG=debug panama-traces --validate --users 5   # needs --features overpass
//! ```

mod cli;

use std::env;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use ct_core::Timestamp;
use ct_output::{TraceOutputObserver, format_preview, open_writer};
use ct_schedule::{CommutePlan, Schedule};
use ct_sim::TraceGeneratorBuilder;
use ct_spatial::{ClusterSet, ReachabilityOracle, load_clusters_csv};

use cli::Args;

fn main() -> Result<()> {
    // log level INFO by default
    let mut env_logger_builder = env_logger::builder();
    if env::var("RUST_LOG").is_err() {
        env_logger_builder.filter_level(log::LevelFilter::Info);
    }
    env_logger_builder.init();

    let args = Args::parse();

    // 1. Day, schedule and commute windows.
    let day = Timestamp::parse_date(&args.date).with_context(|| format!("bad --date {:?}", args.date))?;
    let schedule = Schedule::daily(day, args.interval_secs()?)?;
    let plan = CommutePlan::from_times(day, args.morning, args.evening)?;
    info!(
        "{}: {} samples, morning {}, evening {}",
        args.date,
        schedule.len(),
        format_window(args.morning),
        format_window(args.evening)
    );

    // 2. Clusters.
    let clusters = match &args.clusters {
        Some(path) => load_clusters_csv(path)
            .with_context(|| format!("loading clusters from {}", path.display()))?,
        None => ClusterSet::panama_city(),
    };
    info!("{} home cluster(s), {} job cluster(s)", clusters.home.len(), clusters.job.len());

    // 3. Generator.
    let mut builder = TraceGeneratorBuilder::new(args.sim_config()?, clusters, schedule)
        .commute_plan(plan);
    if args.validate {
        builder = builder.oracle(reachability_oracle()?);
    }
    let generator = builder.build()?;

    // 4. Run, streaming each user to the writer.
    let writer = open_writer(args.format, &args.out_dir)?;
    let mut obs = TraceOutputObserver::new(writer);
    let t0 = Instant::now();
    let run = generator.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        return Err(e).context("writing trace dataset");
    }

    // 5. Summary.
    println!("{}", format_preview(&run.records, args.preview_rows));
    println!();
    println!(
        "{} rows for {} user(s) in {:.3} s -> {}",
        obs.rows_written(),
        run.summary.users_completed,
        elapsed.as_secs_f64(),
        args.out_dir.join(args.format.file_name()).display()
    );

    Ok(())
}

fn format_window((from, to): (ct_core::TimeOfDay, ct_core::TimeOfDay)) -> String {
    format!("{from}-{to}")
}

#[cfg(feature = "overpass")]
fn reachability_oracle() -> Result<Box<dyn ReachabilityOracle>> {
    let oracle = ct_spatial::OverpassOracle::new();
    info!("validating anchor points against {}", oracle.endpoint());
    Ok(Box::new(oracle))
}

#[cfg(not(feature = "overpass"))]
fn reachability_oracle() -> Result<Box<dyn ReachabilityOracle>> {
    anyhow::bail!("--validate needs the `overpass` feature (cargo run --features overpass)")
}

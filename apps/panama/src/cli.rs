//! Command-line arguments.  Every flag can also be set through a `TRACE_*`
//! environment variable.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use ct_core::TimeOfDay;
use ct_output::OutputFormat;
use ct_sim::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "panama-traces", version, about)]
pub struct Args {
    /// Number of simulated users (0 or less writes an empty dataset).
    #[arg(short, long, env = "TRACE_USERS", default_value_t = 100, allow_negative_numbers = true)]
    pub users: i64,

    /// Simulated day, YYYY-MM-DD (UTC).
    #[arg(short, long, env = "TRACE_DATE", default_value = "2023-01-01")]
    pub date: String,

    /// Minutes between samples.
    #[arg(long, env = "TRACE_INTERVAL_MINUTES", default_value_t = 10)]
    pub interval_minutes: u32,

    /// Morning commute window, HH:MM-HH:MM.
    #[arg(long, env = "TRACE_MORNING", default_value = "05:00-07:00", value_parser = parse_window)]
    pub morning: (TimeOfDay, TimeOfDay),

    /// Evening commute window, HH:MM-HH:MM.
    #[arg(long, env = "TRACE_EVENING", default_value = "17:00-19:00", value_parser = parse_window)]
    pub evening: (TimeOfDay, TimeOfDay),

    #[arg(short, long, env = "TRACE_SEED", default_value_t = 42)]
    pub seed: u64,

    /// Standard deviation of the position noise at home and work, degrees.
    #[arg(long, env = "TRACE_JITTER", default_value_t = 0.0005)]
    pub jitter: f64,

    /// Check sampled home and job points against OpenStreetMap.
    #[arg(long, env = "TRACE_VALIDATE")]
    pub validate: bool,

    /// Oracle attempts per anchor point.
    #[arg(long, env = "TRACE_MAX_ATTEMPTS", default_value_t = 10)]
    pub max_attempts: u32,

    /// Pause between oracle attempts, milliseconds.
    #[arg(long, env = "TRACE_ORACLE_PAUSE_MS", default_value_t = 1_000)]
    pub oracle_pause_ms: u64,

    /// Cluster CSV (role,name,lat_min,lat_max,lon_min,lon_max).  Built-in
    /// Panama City clusters when omitted.
    #[arg(long, env = "TRACE_CLUSTERS")]
    pub clusters: Option<PathBuf>,

    #[arg(short, long, env = "TRACE_OUT_DIR", default_value = "output/panama")]
    pub out_dir: PathBuf,

    /// csv, sqlite or parquet.
    #[arg(short, long, env = "TRACE_FORMAT", default_value = "csv")]
    pub format: OutputFormat,

    /// Worker threads (all logical cores when omitted).
    #[arg(long, env = "TRACE_THREADS")]
    pub threads: Option<usize>,

    /// Rows shown in the preview table.
    #[arg(long, env = "TRACE_PREVIEW_ROWS", default_value_t = 5)]
    pub preview_rows: usize,
}

impl Args {
    pub fn interval_secs(&self) -> Result<u32> {
        self.interval_minutes
            .checked_mul(60)
            .context("--interval-minutes is too large")
    }

    pub fn sim_config(&self) -> Result<SimConfig> {
        let user_count = u32::try_from(self.users.max(0)).context("--users is too large")?;
        Ok(SimConfig {
            user_count,
            seed:               self.seed,
            max_attempts:       self.max_attempts,
            oracle_pause:       Duration::from_millis(self.oracle_pause_ms),
            validate_locations: self.validate,
            jitter_sigma_deg:   self.jitter,
            num_threads:        self.threads,
        })
    }
}

/// Parse `HH:MM-HH:MM`.  Ordering is checked later, against the day.
pub fn parse_window(s: &str) -> Result<(TimeOfDay, TimeOfDay), String> {
    let (from, to) = s
        .split_once('-')
        .ok_or_else(|| format!("expected HH:MM-HH:MM, got {s:?}"))?;
    let from = from.trim().parse::<TimeOfDay>().map_err(|e| e.to_string())?;
    let to = to.trim().parse::<TimeOfDay>().map_err(|e| e.to_string())?;
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_parses() {
        let (from, to) = parse_window("07:00-08:30").unwrap();
        assert_eq!(from, TimeOfDay::hm(7, 0).unwrap());
        assert_eq!(to, TimeOfDay::hm(8, 30).unwrap());
    }

    #[test]
    fn window_without_dash_rejected() {
        assert!(parse_window("07:00").is_err());
        assert!(parse_window("07:00-8h").is_err());
    }

    #[test]
    fn defaults_match_sim_config() {
        let args = Args::try_parse_from(["panama-traces"]).unwrap();
        let config = args.sim_config().unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(args.interval_secs().unwrap(), 600);
        assert_eq!(args.format, OutputFormat::Csv);
    }

    #[test]
    fn negative_users_clamped() {
        let args = Args::try_parse_from(["panama-traces", "--users", "-3"]).unwrap();
        assert_eq!(args.sim_config().unwrap().user_count, 0);
    }

    #[test]
    fn custom_windows() {
        let args = Args::try_parse_from(["panama-traces", "--morning", "06:30-08:00", "--evening", "16:00-18:15"])
            .unwrap();
        assert_eq!(args.morning.0, TimeOfDay::hm(6, 30).unwrap());
        assert_eq!(args.evening.1, TimeOfDay::hm(18, 15).unwrap());
    }
}

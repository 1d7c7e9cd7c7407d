//! Command line surface of the `bagging-mapper` binary.

use crate::config::{self, Config, ConfigBuilder};
use crate::core::error::Result;
use crate::sampler::{EnsembleSampler, SampleStats};

use clap::Parser;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Mapper stage for bagged ensemble training.
///
/// Reads one training record per line from stdin and, for every ensemble
/// member, keeps each record with probability SAMPLE_RATIO. Kept records are
/// written to stdout as `<model>\t<record>`, ready to be grouped by model
/// for per-model training.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "bagging-mapper", version, about, long_about = None)]
pub struct Cli {
    /// Number of models in the ensemble
    #[arg(short = 'n', long = "model-num", allow_negative_numbers = true)]
    pub model_num: Option<i64>,

    /// Probability of keeping a record for each model, in [0, 1]
    #[arg(short = 'r', long = "sample-ratio", allow_negative_numbers = true)]
    pub sample_ratio: Option<f64>,

    /// Seed for the sampling generator [default: 6505]
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// TOML or JSON file providing defaults for the options above
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Write a JSON report of the run (configuration and counts) to this file
    #[arg(long)]
    pub stats_file: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Logging verbosity: -1 errors only, 0 warnings, 1 info, 2+ debug
    pub fn verbosity(&self) -> i32 {
        if self.quiet {
            -1
        } else {
            i32::from(self.verbose)
        }
    }

    /// Configuration values given on the command line
    pub fn overrides(&self) -> ConfigBuilder {
        ConfigBuilder {
            model_num: self.model_num,
            sample_ratio: self.sample_ratio,
            seed: self.seed,
        }
    }

    /// Resolves the full configuration from file, environment and flags
    pub fn resolve_config(&self) -> Result<Config> {
        config::resolve(self.config.as_ref(), &self.overrides())
    }
}

/// Configuration and counts of one run, written by `--stats-file`.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport<'a> {
    /// Configuration the run used
    pub config: &'a Config,
    /// Counts gathered during the run
    pub stats: &'a SampleStats,
}

impl RunReport<'_> {
    /// Writes the report as pretty-printed JSON
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

/// Resolves the configuration, then streams `input` to `output`.
///
/// The configuration is fully validated before the first byte of input is
/// read, so a configuration error never produces partial output.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, output: W) -> Result<(Config, SampleStats)> {
    let config = cli.resolve_config()?;
    log::info!("starting sampler: {}", config.summary());

    let stats = EnsembleSampler::new(config.clone()).run(input, output)?;
    Ok((config, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bagging-mapper").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_short_and_long_flags() {
        let short = parse(&["-n", "3", "-r", "0.5"]);
        let long = parse(&["--model-num", "3", "--sample-ratio", "0.5"]);
        assert_eq!(short, long);
        assert_eq!(short.model_num, Some(3));
        assert_eq!(short.sample_ratio, Some(0.5));
        assert_eq!(short.seed, None);
    }

    #[test]
    fn test_negative_model_num_parses() {
        let cli = parse(&["-n", "-2", "-r", "0.5"]);
        assert_eq!(cli.model_num, Some(-2));
        assert!(cli.overrides().build().unwrap_err().is_config_error());
    }

    #[test]
    fn test_non_numeric_values_rejected() {
        assert!(Cli::try_parse_from(["bagging-mapper", "-n", "three", "-r", "0.5"]).is_err());
        assert!(Cli::try_parse_from(["bagging-mapper", "-n", "3", "-r", "half"]).is_err());
        assert!(Cli::try_parse_from(["bagging-mapper", "-n", "2.5", "-r", "0.5"]).is_err());
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(parse(&[]).verbosity(), 0);
        assert_eq!(parse(&["-vv"]).verbosity(), 2);
        assert_eq!(parse(&["-q"]).verbosity(), -1);
        assert!(Cli::try_parse_from(["bagging-mapper", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = parse(&["-n", "4", "-s", "17"]);
        assert_eq!(cli.overrides(), ConfigBuilder::new().model_num(4).seed(17));
    }

    #[test]
    fn test_report_json() {
        let config = ConfigBuilder::new().model_num(2).sample_ratio(1.0).build().unwrap();
        let mut stats = SampleStats::new(2);
        stats.records_read = 1;
        stats.pairs_emitted = 2;
        stats.per_model = vec![1, 1];

        let mut out = Vec::new();
        RunReport { config: &config, stats: &stats }.write_json(&mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["config"]["num_models"], 2);
        assert_eq!(value["stats"]["pairs_emitted"], 2);
        assert_eq!(value["stats"]["per_model"], serde_json::json!([1, 1]));
    }
}

//! Common test utilities for bagging mapper integration tests.

#![allow(dead_code)]

use bagging_mapper::{
    Config, ConfigBuilder, EnsembleSampler, SampleStats, ENV_MODEL_NUM, ENV_SAMPLE_RATIO, ENV_SEED,
};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Build a validated configuration, panicking on invalid input
pub fn make_config(num_models: i64, ratio: f64, seed: u64) -> Config {
    ConfigBuilder::new()
        .model_num(num_models)
        .sample_ratio(ratio)
        .seed(seed)
        .build()
        .expect("test configuration should be valid")
}

/// Input with `num_records` distinct lines
pub fn numbered_input(num_records: usize) -> String {
    (0..num_records).map(|i| format!("record-{}\n", i)).collect()
}

/// Run the sampler in memory and return its output and statistics
pub fn sample_to_string(config: Config, input: &str) -> (String, SampleStats) {
    let mut out = Vec::new();
    let stats = EnsembleSampler::new(config)
        .run(input.as_bytes(), &mut out)
        .expect("in-memory sampling should not fail");
    (String::from_utf8(out).expect("output should be UTF-8"), stats)
}

/// Split output lines into `(model, record)` pairs
pub fn parse_pairs(output: &str) -> Vec<(usize, String)> {
    output
        .lines()
        .map(|line| {
            let (key, value) = line.split_once('\t').expect("missing tab delimiter");
            (key.parse().expect("key should be an integer"), value.to_string())
        })
        .collect()
}

/// Group output records by model, preserving order within each model
pub fn group_by_model(output: &str) -> BTreeMap<usize, Vec<String>> {
    let mut groups: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    for (model, record) in parse_pairs(output) {
        groups.entry(model).or_default().push(record);
    }
    groups
}

/// Path of the compiled mapper binary
pub fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bagging-mapper"))
}

/// Run the binary with `args`, feeding `stdin`, with a clean environment
pub fn run_binary(args: &[&str], stdin: &[u8]) -> Output {
    run_binary_with_env(args, stdin, &[])
}

/// Run the binary with extra environment variables
pub fn run_binary_with_env(args: &[&str], stdin: &[u8], env: &[(&str, &str)]) -> Output {
    let mut command = Command::new(binary_path());
    command
        .args(args)
        .env_remove(ENV_MODEL_NUM)
        .env_remove(ENV_SAMPLE_RATIO)
        .env_remove(ENV_SEED)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (key, value) in env {
        command.env(key, value);
    }

    let mut child = command.spawn().expect("failed to spawn bagging-mapper");
    {
        let mut child_stdin = child.stdin.take().expect("stdin should be piped");
        // The process may exit before reading (configuration errors)
        let _ = child_stdin.write_all(stdin);
    }
    child.wait_with_output().expect("failed to wait for bagging-mapper")
}

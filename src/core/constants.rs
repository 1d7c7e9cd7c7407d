//! System constants and default configuration values for the bagging mapper.

/// Default seed for the sampling generator.
/// Fixed so that repeated runs over the same shard produce identical output.
pub const DEFAULT_SEED: u64 = 6505;

/// Separator between the model key and the record on every output line.
pub const KEY_VALUE_DELIMITER: u8 = b'\t';

/// Terminator for input records and output pairs.
pub const RECORD_TERMINATOR: u8 = b'\n';

/// Prefix shared by all environment variable overrides.
pub const ENV_PREFIX: &str = "BAGGING_MAPPER_";

/// Environment variable overriding the number of ensemble members.
pub const ENV_MODEL_NUM: &str = "BAGGING_MAPPER_MODEL_NUM";

/// Environment variable overriding the per-model sample ratio.
pub const ENV_SAMPLE_RATIO: &str = "BAGGING_MAPPER_SAMPLE_RATIO";

/// Environment variable overriding the generator seed.
pub const ENV_SEED: &str = "BAGGING_MAPPER_SEED";

/// Ensembles larger than this multiply the output volume enough to warrant a warning.
pub const LARGE_MODEL_COUNT_WARNING: usize = 1024;

/// Largest accepted ensemble size. Per-model counters are allocated up front,
/// so anything above this is rejected as a configuration error.
pub const MAX_MODEL_NUM: usize = 1 << 20;

/// Records between two debug progress messages.
pub const PROGRESS_LOG_INTERVAL: u64 = 100_000;

/// Initial capacity of the line buffer used by the record reader.
pub const DEFAULT_LINE_BUFFER_CAPACITY: usize = 4096;

/// Library version, taken from the package manifest.
pub const BAGGING_MAPPER_VERSION: &str = env!("CARGO_PKG_VERSION");

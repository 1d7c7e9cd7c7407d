/// Logging setup
pub mod log;
/// Seeded random generator
pub mod random;

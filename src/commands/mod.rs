//! CLI command implementations.
//!
//! One module per binary entry point; each exposes a config struct built by
//! the binary from parsed arguments and a single entry function.
//!
//! - **stats**: scan a text file and report counts and extremes
//! - **primes**: list primes in a window and a fixed-length prime run

pub mod primes;
pub mod stats;

pub use primes::{find_primes, PrimesConfig};
pub use stats::{analyze_file, StatsConfig};

use anyhow::Result;
use clap::Parser;
use textscan::cli::PrimesCli;
use textscan::commands::primes::{find_primes, PrimesConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = PrimesCli::parse();
    find_primes(build_primes_config(cli))
}

// Pure function to map parsed arguments onto the command configuration
fn build_primes_config(cli: PrimesCli) -> PrimesConfig {
    PrimesConfig {
        start: cli.start,
        stop: cli.stop,
        format: cli.format,
    }
}

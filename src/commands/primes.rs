use crate::cli::PrimesFormat;
use crate::core::PrimeReport;
use crate::primes;
use anyhow::Result;
use colored::*;

/// Configuration for the primes command
#[derive(Debug, Clone, Copy)]
pub struct PrimesConfig {
    pub start: u64,
    pub stop: u64,
    pub format: PrimesFormat,
}

/// Materialize both prime listings and print them.
pub fn find_primes(config: PrimesConfig) -> Result<()> {
    let report = build_report(config.start, config.stop);

    match config.format {
        PrimesFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        PrimesFormat::Terminal => print_report(&report),
    }

    Ok(())
}

/// Collect the primes inside `[start, stop)` and the prime run of length
/// `stop - start` beginning at `start`.
pub fn build_report(start: u64, stop: u64) -> PrimeReport {
    let in_range: Vec<u64> = primes::primes_in_range(start, stop).collect();
    let length = stop.saturating_sub(start) as usize;
    let sequence = primes::prime_sequence(start, length);

    log::debug!(
        "{} primes in [{start}, {stop}), sequence of {}",
        in_range.len(),
        sequence.len()
    );

    PrimeReport {
        start,
        stop,
        in_range,
        sequence,
    }
}

fn print_report(report: &PrimeReport) {
    println!(
        "{}",
        format!("Primes in [{}, {}):", report.start, report.stop)
            .bold()
            .blue()
    );
    println!("  {}", join(&report.in_range));
    println!();
    println!(
        "{}",
        format!(
            "Prime sequence of length {} from {}:",
            report.sequence.len(),
            report.start
        )
        .bold()
        .blue()
    );
    println!("  {}", join(&report.sequence));
}

fn join(primes: &[u64]) -> String {
    primes
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

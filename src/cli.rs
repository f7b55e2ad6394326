use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for file statistics reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Terminal,
    /// Pretty-printed JSON report
    Json,
    /// Markdown report
    Markdown,
}

#[derive(Parser, Debug)]
#[command(name = "textscan")]
#[command(about = "Analyze a text file: line, word and character statistics", long_about = None)]
#[command(version)]
pub struct StatsCli {
    /// File to analyze
    pub file: PathBuf,

    /// Report the longest lines
    #[arg(short = 'L', long = "longest-lines")]
    pub longest_lines: bool,

    /// Report the longest words
    #[arg(short = 'W', long = "longest-words")]
    pub longest_words: bool,

    /// Report all statistics
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Output format for the primes tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrimesFormat {
    /// Human-readable terminal output
    Terminal,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "primes")]
#[command(about = "Find primes in a range or a sequence", long_about = None)]
#[command(version)]
pub struct PrimesCli {
    /// Start of the range, inclusive; also where the sequence scan begins
    pub start: u64,

    /// End of the range, exclusive; the sequence length is stop - start
    pub stop: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: PrimesFormat,
}

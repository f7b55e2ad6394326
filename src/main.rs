use anyhow::Result;
use clap::Parser;
use textscan::cli::{self, StatsCli};
use textscan::commands::stats::{analyze_file, StatsConfig};
use textscan::io::output::OutputFormat;

fn main() -> Result<()> {
    env_logger::init();
    let cli = StatsCli::parse();
    analyze_file(build_stats_config(cli))
}

// Pure function to map parsed arguments onto the command configuration
fn build_stats_config(cli: StatsCli) -> StatsConfig {
    StatsConfig {
        path: cli.file,
        longest_lines: cli.longest_lines,
        longest_words: cli.longest_words,
        all: cli.all,
        format: convert_output_format(cli.format),
        output: cli.output,
    }
}

// Pure function to map the CLI format onto the writer format
fn convert_output_format(format: cli::OutputFormat) -> OutputFormat {
    match format {
        cli::OutputFormat::Terminal => OutputFormat::Terminal,
        cli::OutputFormat::Json => OutputFormat::Json,
        cli::OutputFormat::Markdown => OutputFormat::Markdown,
    }
}

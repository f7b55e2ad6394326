use crate::core::FileReport;
use crate::io::output::{create_writer, OutputFormat};
use crate::{io, stats};
use anyhow::Result;
use chrono::Utc;
use std::path::PathBuf;

/// Configuration for the file statistics command
#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub path: PathBuf,
    pub longest_lines: bool,
    pub longest_words: bool,
    pub all: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Scan the configured file and write the selected report sections.
pub fn analyze_file(config: StatsConfig) -> Result<()> {
    let lines = io::read_lines(&config.path)?;
    log::debug!(
        "scanning {} lines from {}",
        lines.len(),
        config.path.display()
    );

    let report = build_report(&config, &lines);
    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_report(&report)
}

/// Assemble the report sections the selection flags ask for.
///
/// No flags means the concise count summary; `-L` and `-W` select their
/// sections and combine; `-a` selects everything.
fn build_report(config: &StatsConfig, lines: &[String]) -> FileReport {
    let summary_only = !config.longest_lines && !config.longest_words;

    FileReport {
        path: config.path.clone(),
        timestamp: Utc::now(),
        summary: (config.all || summary_only).then(|| stats::summarize(lines)),
        longest_lines: (config.all || config.longest_lines).then(|| stats::longest_lines(lines)),
        longest_words: (config.all || config.longest_words).then(|| stats::longest_words(lines)),
    }
}

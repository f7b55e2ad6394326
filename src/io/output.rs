use crate::core::{CountSummary, FileReport};
use colored::*;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &FileReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &FileReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &FileReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        if let Some(summary) = &report.summary {
            self.write_summary(summary)?;
        }
        if let Some(lines) = &report.longest_lines {
            self.write_section("Longest lines", lines)?;
        }
        if let Some(words) = &report.longest_words {
            self.write_section("Longest words", words)?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &FileReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# File Statistics Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "File: `{}`", report.path.display())?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, summary: &CountSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Lines | {} |", summary.lines)?;
        writeln!(self.writer, "| Words | {} |", summary.words)?;
        writeln!(self.writer, "| Characters | {} |", summary.chars)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_section(&mut self, title: &str, entries: &BTreeSet<String>) -> anyhow::Result<()> {
        writeln!(self.writer, "## {title}")?;
        writeln!(self.writer)?;
        for entry in entries {
            writeln!(self.writer, "- `{entry}`")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &FileReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "File Statistics".bold().blue())?;
        writeln!(self.writer, "{}", "===============".blue())?;
        writeln!(self.writer, "  File: {}", report.path.display())?;
        writeln!(self.writer)?;

        if let Some(summary) = &report.summary {
            writeln!(self.writer, "  Lines: {}", summary.lines)?;
            writeln!(self.writer, "  Words: {}", summary.words)?;
            writeln!(self.writer, "  Characters: {}", summary.chars)?;
            writeln!(self.writer)?;
        }

        if let Some(lines) = &report.longest_lines {
            writeln!(self.writer, "{}", "Longest lines:".bold())?;
            for line in lines {
                writeln!(self.writer, "  {line:?}")?;
            }
            writeln!(self.writer)?;
        }

        if let Some(words) = &report.longest_words {
            writeln!(self.writer, "{}", "Longest words:".bold())?;
            for word in words {
                writeln!(self.writer, "  {word:?}")?;
            }
            writeln!(self.writer)?;
        }

        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn ReportWriter>> {
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::path::PathBuf;

    fn sample_report() -> FileReport {
        FileReport {
            path: PathBuf::from("sample.txt"),
            timestamp: Utc::now(),
            summary: Some(CountSummary {
                lines: 2,
                words: 4,
                chars: 20,
            }),
            longest_lines: Some(["hello, world!".to_string()].into()),
            longest_words: Some(["second".to_string()].into()),
        }
    }

    #[test]
    fn json_writer_round_trips_the_report() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let parsed: FileReport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.summary, sample_report().summary);
        assert_eq!(parsed.longest_words, sample_report().longest_words);
    }

    #[test]
    fn json_writer_skips_absent_sections() {
        let report = FileReport {
            summary: None,
            longest_lines: None,
            ..sample_report()
        };

        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(&report).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(!text.contains("summary"));
        assert!(!text.contains("longest_lines"));
        assert!(text.contains("longest_words"));
    }

    #[test]
    fn markdown_writer_emits_selected_sections() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("# File Statistics Report"));
        assert!(text.contains("| Lines | 2 |"));
        assert!(text.contains("## Longest lines"));
        assert!(text.contains("- `hello, world!`"));
    }

    #[test]
    fn terminal_writer_prints_counts() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_report(&sample_report())
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Lines: 2"));
        assert!(text.contains("Words: 4"));
        assert!(text.contains("Characters: 20"));
    }
}

//! Rendering of training summaries
//!
//! The text format is the one-line-per-workout report. Table and JSON are
//! alternative views of the same summaries.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::Result;
use crate::summary::{MessageLocale, TrainingSummary};

pub mod json;
pub mod text;

/// Output format of rendered summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One report line per workout
    #[default]
    #[value(alias = "txt")]
    Text,
    /// Aligned table of the metrics
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// Render summaries into a string in the requested format
pub fn render_summaries(
    summaries: &[TrainingSummary],
    format: ExportFormat,
    locale: MessageLocale,
) -> Result<String> {
    let rendered = match format {
        ExportFormat::Text => text::render_lines(summaries, locale),
        ExportFormat::Table => text::render_table(summaries, locale),
        ExportFormat::Json => json::render_json(summaries)?,
    };
    Ok(rendered)
}

/// Write rendered summaries followed by a newline
pub fn write_summaries<W: Write>(
    writer: &mut W,
    summaries: &[TrainingSummary],
    format: ExportFormat,
    locale: MessageLocale,
) -> Result<()> {
    let rendered = render_summaries(summaries, format, locale)?;
    if !rendered.is_empty() {
        writeln!(writer, "{}", rendered)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summaries() -> Vec<TrainingSummary> {
        vec![
            TrainingSummary::new("Running", 1.0, 9.75, 9.75, 699.75),
            TrainingSummary::new("SportsWalking", 1.0, 5.85, 5.85, 157.5),
        ]
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(ExportFormat::from_str("TXT", true).unwrap(), ExportFormat::Text);
        assert_eq!(ExportFormat::from_str("table", false).unwrap(), ExportFormat::Table);
        assert!(ExportFormat::from_str("pdf", true).is_err());
    }

    #[test]
    fn test_text_is_one_line_per_summary() {
        let rendered =
            render_summaries(&summaries(), ExportFormat::Text, MessageLocale::Russian).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("Тип тренировки: SportsWalking;"));
    }

    #[test]
    fn test_write_summaries() {
        let mut buffer = Vec::new();
        write_summaries(
            &mut buffer,
            &summaries(),
            ExportFormat::Json,
            MessageLocale::Russian,
        )
        .unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.ends_with("]\n"));
    }

    #[test]
    fn test_write_nothing_for_empty_text() {
        let mut buffer = Vec::new();
        write_summaries(&mut buffer, &[], ExportFormat::Text, MessageLocale::Russian).unwrap();
        assert!(buffer.is_empty());
    }
}

//! Report types and their console/JSON rendering

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use versification_core::{AbsoluteVerseNumbering, OffsetRange, VersificationSystem};

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Console,
    /// Compact JSON for scripts
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// A report that can be printed as text or serialized
pub trait Report: Serialize {
    fn write_console(&self, output: &mut String) -> std::fmt::Result;
}

pub fn render<R: Report>(report: &R, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Console => {
            let mut output = String::new();
            report.write_console(&mut output)?;
            output
        }
        OutputFormat::Json => serde_json::to_string(report)?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(report)?,
    };
    Ok(rendered)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertReport {
    pub reference: String,
    pub system: VersificationSystem,
    pub absolute_verse_nr: i64,
    pub offset: i64,
    pub numbering: AbsoluteVerseNumbering,
    /// Hebrew chapter:verse, only known for Psalms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hebrew_reference: Option<String>,
}

impl Report for ConvertReport {
    fn write_console(&self, output: &mut String) -> std::fmt::Result {
        writeln!(output, "Reference:  {}", self.reference)?;
        if let Some(hebrew) = &self.hebrew_reference {
            writeln!(output, "Hebrew:     {}", hebrew)?;
        }
        writeln!(output, "Input:      {} ({})", self.absolute_verse_nr, self.system)?;
        writeln!(output, "Offset:     {:+}", self.offset)?;
        writeln!(output, "ENGLISH:    {}", self.numbering.absolute_verse_nr_eng)?;
        writeln!(output, "HEBREW:     {}", self.numbering.absolute_verse_nr_heb)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetReport {
    pub reference: String,
    pub offset: i64,
    /// Range that produced the offset, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_range: Option<OffsetRange>,
}

impl Report for OffsetReport {
    fn write_console(&self, output: &mut String) -> std::fmt::Result {
        match &self.matched_range {
            Some(range) => writeln!(
                output,
                "{}: offset {:+} (range {})",
                self.reference, self.offset, range
            ),
            None => writeln!(output, "{}: offset 0 (no correction)", self.reference),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub book: String,
    pub name: String,
    pub ranges: Vec<OffsetRange>,
}

impl Report for TableReport {
    fn write_console(&self, output: &mut String) -> std::fmt::Result {
        if self.ranges.is_empty() {
            return writeln!(
                output,
                "{} ({}): ENGLISH and HEBREW numbering are identical",
                self.name, self.book
            );
        }

        writeln!(output, "{} ({}): {} ranges", self.name, self.book, self.ranges.len())?;
        for range in &self.ranges {
            writeln!(output, "  {}", range)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub source: String,
    pub valid: bool,
    /// Whether the Psalms table equals the one derived from superscription data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psalms_match_reference: Option<bool>,
    pub books: Vec<BookSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSummary {
    pub book: String,
    pub ranges: usize,
}

impl Report for CheckReport {
    fn write_console(&self, output: &mut String) -> std::fmt::Result {
        let status = if self.valid { "✓ valid" } else { "✗ invalid" };
        writeln!(output, "Offset tables: {} ({})", self.source, status)?;
        match self.psalms_match_reference {
            Some(true) => writeln!(output, "  Psalms table matches superscription data")?,
            Some(false) => writeln!(output, "  Psalms table differs from superscription data")?,
            None => {}
        }
        for book in &self.books {
            writeln!(output, "  {:<6} {:>3} ranges", book.book, book.ranges)?;
        }
        if let Some(error) = &self.error {
            writeln!(output, "Error: {}", error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ConvertReport {
        ConvertReport {
            reference: "Ps 3:2".to_string(),
            system: VersificationSystem::English,
            absolute_verse_nr: 10,
            offset: 1,
            numbering: AbsoluteVerseNumbering::new(10, 11),
            hebrew_reference: Some("Ps 3:3".to_string()),
        }
    }

    #[test]
    fn test_console_convert_report() {
        let text = render(&sample(), OutputFormat::Console).unwrap();
        assert!(text.contains("Reference:  Ps 3:2"));
        assert!(text.contains("Hebrew:     Ps 3:3"));
        assert!(text.contains("Offset:     +1"));
        assert!(text.contains("HEBREW:     11"));
    }

    #[test]
    fn test_json_convert_report() {
        let text = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["system"], "ENGLISH");
        assert_eq!(value["numbering"]["absolute_verse_nr_heb"], 11);
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_offset_report_without_match() {
        let report = OffsetReport {
            reference: "Matt 1:1".to_string(),
            offset: 0,
            matched_range: None,
        };
        assert_eq!(
            render(&report, OutputFormat::Console).unwrap(),
            "Matt 1:1: offset 0 (no correction)\n"
        );
        assert_eq!(
            render(&report, OutputFormat::Json).unwrap(),
            r#"{"reference":"Matt 1:1","offset":0}"#
        );
    }

    #[test]
    fn test_output_format_names() {
        let format: OutputFormat = serde_json::from_str("\"json-pretty\"").unwrap();
        assert_eq!(format, OutputFormat::JsonPretty);
        assert_eq!(OutputFormat::default(), OutputFormat::Console);
    }
}

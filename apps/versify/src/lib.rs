//! Command-line front end for the versification converter
//!
//! Converts absolute verse numbers between ENGLISH and HEBREW numbering,
//! shows the offset applied at a location, and dumps or validates the
//! offset tables in use.

pub mod config;
pub mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use versification_core::{
    psalms, BookCode, OffsetTables, VerseLocation, VersificationConverter, VersificationSystem,
};

use crate::config::Config;
use crate::output::{
    render, BookSummary, CheckReport, ConvertReport, OffsetReport, OutputFormat, TableReport,
};

#[derive(Parser, Debug)]
#[command(name = "versify")]
#[command(
    version,
    about = "Convert absolute verse numbers between ENGLISH and HEBREW versification"
)]
pub struct Cli {
    /// Configuration file (defaults to ./versify.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overriding the configuration file
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Offset tables file replacing the built-in tables
    #[arg(long, global = true)]
    pub tables: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute both absolute numbers of a verse
    Convert {
        /// Reference such as "Ps 3:2"
        reference: String,
        /// Absolute verse number in the given system
        #[arg(long = "abs", allow_negative_numbers = true)]
        absolute_verse_nr: i64,
        /// System of the absolute number (english|hebrew)
        #[arg(short, long)]
        system: Option<String>,
    },
    /// Show the offset applied at a location
    Offset {
        /// Reference such as "1Sam 21:1"
        reference: String,
    },
    /// List the offset ranges of a book
    Table {
        /// Book code or name
        book: String,
    },
    /// Validate the active offset tables
    Check,
}

/// Settings after merging the configuration file with command-line flags
pub struct Session {
    pub format: OutputFormat,
    pub default_system: VersificationSystem,
    tables: Option<OffsetTables>,
    source: String,
}

impl Session {
    pub fn new(cli: &Cli, config: &Config) -> Result<Self> {
        let (tables, source) = match &cli.tables {
            Some(path) => {
                let tables = OffsetTables::from_file(path)?;
                (Some(tables), path.display().to_string())
            }
            None => {
                let tables = config.load_tables()?;
                let source = config
                    .tables_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "built-in".to_string());
                (tables, source)
            }
        };

        Ok(Self {
            format: cli.format.unwrap_or(config.output.format),
            default_system: config.converter.default_system,
            tables,
            source,
        })
    }

    pub fn converter(&self) -> VersificationConverter<'_> {
        match &self.tables {
            Some(tables) => VersificationConverter::new(tables),
            None => VersificationConverter::builtin(),
        }
    }
}

/// Execute a command and return its rendered output
pub fn run(cli: &Cli, config: &Config) -> Result<String> {
    let session = Session::new(cli, config)?;
    let converter = session.converter();

    match &cli.command {
        Command::Convert {
            reference,
            absolute_verse_nr,
            system,
        } => {
            let location = VerseLocation::parse(reference)?;
            let system = match system {
                Some(name) => name.parse::<VersificationSystem>()?,
                None => session.default_system,
            };

            let numbering = converter.checked_numbering_for(
                location.book,
                system,
                *absolute_verse_nr,
                location.chapter,
                location.verse_nr,
            )?;
            tracing::debug!(%location, ?system, ?numbering, "Converted");

            let hebrew_reference = match location.book {
                BookCode::Psalms => psalms::hebrew_location(location.chapter, location.verse_nr)
                    .map(|(c, v)| VerseLocation::new(BookCode::Psalms, c, v).to_string()),
                _ => None,
            };

            let report = ConvertReport {
                reference: location.to_string(),
                system,
                absolute_verse_nr: *absolute_verse_nr,
                offset: numbering.absolute_verse_nr_heb - numbering.absolute_verse_nr_eng,
                numbering,
                hebrew_reference,
            };
            render(&report, session.format)
        }
        Command::Offset { reference } => {
            let location = VerseLocation::parse(reference)?;
            let matched_range = converter
                .offset_table(location.book)
                .and_then(|table| table.find_range(location.chapter, location.verse_nr))
                .copied();

            let report = OffsetReport {
                reference: location.to_string(),
                offset: converter.offset_for_location(
                    location.book,
                    location.chapter,
                    location.verse_nr,
                ),
                matched_range,
            };
            render(&report, session.format)
        }
        Command::Table { book } => {
            let book = book.parse::<BookCode>()?;
            let ranges = converter
                .offset_table(book)
                .map(|table| table.ranges.clone())
                .unwrap_or_default();

            let report = TableReport {
                book: book.code().to_string(),
                name: book.name().to_string(),
                ranges,
            };
            render(&report, session.format)
        }
        Command::Check => {
            let tables = converter.tables();
            let error = tables.validate().err().map(|e| e.to_string());
            if let Some(error) = &error {
                tracing::warn!("Offset table validation failed: {}", error);
            }

            let psalms_match_reference = tables
                .get(BookCode::Psalms)
                .map(|table| table.ranges == psalms::english_anchored_ranges());

            let report = CheckReport {
                source: session.source.clone(),
                valid: error.is_none(),
                psalms_match_reference,
                books: tables
                    .iter()
                    .map(|table| BookSummary {
                        book: table.book.code().to_string(),
                        ranges: table.ranges.len(),
                    })
                    .collect(),
                error,
            };
            render(&report, session.format)
        }
    }
}

//! Offset tables and range matching
//!
//! An [`OffsetRange`] covers a stretch of chapter/verse locations within one
//! book. Its `offset` is added to an ENGLISH absolute verse number to obtain
//! the HEBREW one. A [`BookOffsetTable`] is matched first-match-wins in the
//! order the ranges were authored.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::book::BookCode;
use crate::data;
use crate::error::VersificationError;

/// A chapter/verse stretch with a signed numbering correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffsetRange {
    pub start_chapter: u32,
    pub start_verse: u32,
    pub end_chapter: u32,
    pub end_verse: u32,
    pub offset: i32,
}

impl OffsetRange {
    pub const fn new(
        start_chapter: u32,
        start_verse: u32,
        end_chapter: u32,
        end_verse: u32,
        offset: i32,
    ) -> Self {
        Self {
            start_chapter,
            start_verse,
            end_chapter,
            end_verse,
            offset,
        }
    }

    pub fn contains(&self, chapter: u32, verse_nr: u32) -> bool {
        is_in_range(chapter, verse_nr, self)
    }

    fn start(&self) -> (u32, u32) {
        (self.start_chapter, self.start_verse)
    }

    fn end(&self) -> (u32, u32) {
        (self.end_chapter, self.end_verse)
    }
}

impl std::fmt::Display for OffsetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}-{}:{} ({:+})",
            self.start_chapter, self.start_verse, self.end_chapter, self.end_verse, self.offset
        )
    }
}

/// Check whether a chapter/verse location falls inside `range`
///
/// The start chapter only bounds the verse from below and the end chapter only
/// bounds it from above; chapters strictly in between match entirely.
pub fn is_in_range(chapter: u32, verse_nr: u32, range: &OffsetRange) -> bool {
    let in_chapter_range = chapter >= range.start_chapter && chapter <= range.end_chapter;

    let in_verse_range = if chapter == range.start_chapter && chapter == range.end_chapter {
        verse_nr >= range.start_verse && verse_nr <= range.end_verse
    } else if chapter == range.start_chapter {
        verse_nr >= range.start_verse
    } else if chapter == range.end_chapter {
        verse_nr <= range.end_verse
    } else {
        true
    };

    in_chapter_range && in_verse_range
}

/// Ordered offset ranges for a single book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookOffsetTable {
    pub book: BookCode,
    pub ranges: Vec<OffsetRange>,
}

impl BookOffsetTable {
    pub fn new(book: BookCode, ranges: Vec<OffsetRange>) -> Self {
        Self { book, ranges }
    }

    /// First range containing the location, in authored order
    pub fn find_range(&self, chapter: u32, verse_nr: u32) -> Option<&OffsetRange> {
        self.ranges
            .iter()
            .find(|range| is_in_range(chapter, verse_nr, range))
    }

    /// Offset of the first matching range, 0 when nothing matches
    pub fn offset_for(&self, chapter: u32, verse_nr: u32) -> i32 {
        self.find_range(chapter, verse_nr)
            .map(|range| range.offset)
            .unwrap_or(0)
    }

    /// Ensure every range is well ordered and no two ranges overlap
    ///
    /// # Errors
    ///
    /// Returns [`VersificationError::InvalidRange`] for a range ending before
    /// it starts and [`VersificationError::OverlappingRanges`] for two ranges
    /// sharing a location.
    pub fn validate(&self) -> Result<(), VersificationError> {
        for range in &self.ranges {
            if range.start() > range.end() {
                return Err(VersificationError::InvalidRange {
                    book: self.book,
                    range: *range,
                });
            }
        }

        let mut sorted = self.ranges.clone();
        sorted.sort_by_key(|range| range.start());

        // Track the range reaching furthest so nested ranges are caught too
        let mut furthest: Option<OffsetRange> = None;
        for range in sorted {
            if let Some(prev) = furthest {
                if range.start() <= prev.end() {
                    return Err(VersificationError::OverlappingRanges {
                        book: self.book,
                        first: prev,
                        second: range,
                    });
                }
            }
            if furthest.map_or(true, |prev| range.end() > prev.end()) {
                furthest = Some(range);
            }
        }

        Ok(())
    }
}

lazy_static! {
    static ref BUILTIN_TABLES: OffsetTables = OffsetTables::from_static(data::BUILTIN_OFFSETS);
}

/// Immutable set of per-book offset tables
///
/// Books without a table number their verses identically in both systems.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetTables {
    tables: BTreeMap<BookCode, BookOffsetTable>,
}

impl OffsetTables {
    /// The compiled-in tables, initialized once per process
    pub fn builtin() -> &'static OffsetTables {
        &BUILTIN_TABLES
    }

    fn from_static(entries: &[(BookCode, &[OffsetRange])]) -> Self {
        let tables = entries
            .iter()
            .map(|(book, ranges)| (*book, BookOffsetTable::new(*book, ranges.to_vec())))
            .collect();
        Self { tables }
    }

    /// Build from per-book tables
    ///
    /// Tables without ranges are dropped, so such books resolve to no table
    /// at all, like any other book without corrections.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A book appears more than once
    /// - A range ends before it starts or overlaps another range of its book
    pub fn from_tables(
        tables: impl IntoIterator<Item = BookOffsetTable>,
    ) -> Result<Self, VersificationError> {
        let mut seen = BTreeSet::new();
        let mut map = BTreeMap::new();
        for table in tables {
            let book = table.book;
            if !seen.insert(book) {
                return Err(VersificationError::TableFormat(format!(
                    "duplicate table for {}",
                    book
                )));
            }
            if table.ranges.is_empty() {
                tracing::debug!("Skipping empty offset table for {}", book);
                continue;
            }
            map.insert(book, table);
        }

        let tables = Self { tables: map };
        tables.validate()?;
        Ok(tables)
    }

    pub fn get(&self, book: BookCode) -> Option<&BookOffsetTable> {
        self.tables.get(&book)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BookOffsetTable> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Validate every book's ranges
    ///
    /// # Errors
    ///
    /// Returns the first [`VersificationError::InvalidRange`] or
    /// [`VersificationError::OverlappingRanges`] found.
    pub fn validate(&self) -> Result<(), VersificationError> {
        for table in self.tables.values() {
            table.validate()?;
        }
        Ok(())
    }

    /// Load tables from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML tables file
    ///
    /// # Errors
    ///
    /// Returns [`VersificationError::TableFormat`] if the file cannot be read,
    /// plus the errors of [`OffsetTables::from_toml_str`].
    ///
    /// # Example file
    ///
    /// ```toml
    /// [[books]]
    /// book = "Rev"
    /// ranges = [{ start = "12:17", end = "22:21", offset = 1 }]
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VersificationError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            VersificationError::TableFormat(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse tables from TOML text using "chapter:verse" bounds
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML is malformed or names an unknown book
    /// - A bound is not of the form `chapter:verse`
    /// - The resulting tables fail [`OffsetTables::from_tables`]
    pub fn from_toml_str(s: &str) -> Result<Self, VersificationError> {
        let file: TableFile =
            toml::from_str(s).map_err(|e| VersificationError::TableFormat(e.to_string()))?;

        let mut tables = Vec::with_capacity(file.books.len());
        for entry in file.books {
            let ranges = entry
                .ranges
                .iter()
                .map(RangeEntry::to_range)
                .collect::<Result<Vec<_>, _>>()?;
            tables.push(BookOffsetTable::new(entry.book, ranges));
        }

        let tables = Self::from_tables(tables)?;
        tracing::debug!("Loaded offset tables for {} books", tables.len());
        Ok(tables)
    }

    /// Render tables in the same TOML format accepted by [`OffsetTables::from_toml_str`]
    pub fn to_toml_string(&self) -> Result<String, VersificationError> {
        let file = TableFile {
            books: self
                .tables
                .values()
                .map(|table| BookEntry {
                    book: table.book,
                    ranges: table.ranges.iter().map(RangeEntry::from_range).collect(),
                })
                .collect(),
        };
        toml::to_string(&file).map_err(|e| VersificationError::TableFormat(e.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TableFile {
    #[serde(default)]
    books: Vec<BookEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct BookEntry {
    book: BookCode,
    #[serde(default)]
    ranges: Vec<RangeEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RangeEntry {
    start: String,
    end: String,
    offset: i32,
}

impl RangeEntry {
    fn from_range(range: &OffsetRange) -> Self {
        Self {
            start: format!("{}:{}", range.start_chapter, range.start_verse),
            end: format!("{}:{}", range.end_chapter, range.end_verse),
            offset: range.offset,
        }
    }

    fn to_range(&self) -> Result<OffsetRange, VersificationError> {
        let (start_chapter, start_verse) = parse_chapter_verse(&self.start)?;
        let (end_chapter, end_verse) = parse_chapter_verse(&self.end)?;
        Ok(OffsetRange::new(
            start_chapter,
            start_verse,
            end_chapter,
            end_verse,
            self.offset,
        ))
    }
}

/// Parse a "chapter:verse" pair like "21:1"
pub fn parse_chapter_verse(s: &str) -> Result<(u32, u32), VersificationError> {
    let invalid = || VersificationError::InvalidReference(s.to_string());

    let (chapter, verse) = s.trim().split_once(':').ok_or_else(invalid)?;
    let chapter = chapter.trim().parse().map_err(|_| invalid())?;
    let verse = verse.trim().parse().map_err(|_| invalid())?;
    Ok((chapter, verse))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIRST_SAMUEL: OffsetRange = OffsetRange::new(21, 1, 26, 25, 1);

    #[test]
    fn test_single_chapter_range_is_inclusive() {
        let range = OffsetRange::new(22, 44, 22, 54, 1);
        assert!(is_in_range(22, 44, &range));
        assert!(is_in_range(22, 54, &range));
        assert!(!is_in_range(22, 43, &range));
        assert!(!is_in_range(22, 55, &range));
        assert!(!is_in_range(21, 50, &range));
    }

    #[test]
    fn test_start_chapter_has_no_upper_bound() {
        assert!(is_in_range(21, 1, &FIRST_SAMUEL));
        assert!(is_in_range(21, 999, &FIRST_SAMUEL));
        assert!(!is_in_range(21, 0, &FIRST_SAMUEL));
    }

    #[test]
    fn test_end_chapter_has_no_lower_bound() {
        assert!(is_in_range(26, 25, &FIRST_SAMUEL));
        assert!(is_in_range(26, 0, &FIRST_SAMUEL));
        assert!(!is_in_range(26, 26, &FIRST_SAMUEL));
    }

    #[test]
    fn test_interior_chapters_match_entirely() {
        assert!(is_in_range(23, 0, &FIRST_SAMUEL));
        assert!(is_in_range(24, 500, &FIRST_SAMUEL));
        assert!(!is_in_range(20, 999, &FIRST_SAMUEL));
        assert!(!is_in_range(27, 1, &FIRST_SAMUEL));
    }

    #[test]
    fn test_first_match_wins() {
        // Deliberately overlapping: the earlier entry must win
        let table = BookOffsetTable::new(
            BookCode::Psalms,
            vec![
                OffsetRange::new(13, 1, 13, 5, 9),
                OffsetRange::new(13, 1, 17, 15, 8),
            ],
        );
        assert_eq!(table.offset_for(13, 5), 9);
        assert_eq!(table.offset_for(13, 6), 8);
        assert_eq!(table.offset_for(18, 1), 0);
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let table = BookOffsetTable::new(
            BookCode::Psalms,
            vec![
                OffsetRange::new(13, 6, 17, 15, 8),
                OffsetRange::new(13, 1, 13, 6, 9),
            ],
        );
        assert!(matches!(
            table.validate(),
            Err(VersificationError::OverlappingRanges { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nested_range() {
        let table = BookOffsetTable::new(
            BookCode::Revelation,
            vec![
                OffsetRange::new(1, 1, 10, 1, 1),
                OffsetRange::new(2, 1, 2, 5, 1),
                OffsetRange::new(5, 1, 5, 3, 1),
            ],
        );
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_reversed_range() {
        let table = BookOffsetTable::new(
            BookCode::Acts,
            vec![OffsetRange::new(28, 31, 19, 41, -1)],
        );
        assert!(matches!(
            table.validate(),
            Err(VersificationError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_builtin_tables_validate() {
        OffsetTables::builtin().validate().unwrap();
        assert_eq!(OffsetTables::builtin().len(), 10);
    }

    #[test]
    fn test_parse_chapter_verse() {
        assert_eq!(parse_chapter_verse("21:1").unwrap(), (21, 1));
        assert_eq!(parse_chapter_verse(" 13 : 6 ").unwrap(), (13, 6));
        assert!(parse_chapter_verse("21").is_err());
        assert!(parse_chapter_verse("a:1").is_err());
        assert!(parse_chapter_verse("-1:1").is_err());
    }

    #[test]
    fn test_load_from_toml() {
        let toml = r#"
            [[books]]
            book = "2co"
            ranges = [{ start = "13:13", end = "13:14", offset = -1 }]

            [[books]]
            book = "Rev"
            ranges = [{ start = "12:17", end = "22:21", offset = 1 }]
        "#;
        let tables = OffsetTables::from_toml_str(toml).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(
            tables.get(BookCode::SecondCorinthians).unwrap().ranges,
            vec![OffsetRange::new(13, 13, 13, 14, -1)]
        );
        assert_eq!(tables.get(BookCode::Revelation).unwrap().offset_for(15, 3), 1);
    }

    #[test]
    fn test_load_rejects_duplicate_books_and_bad_bounds() {
        let duplicate = r#"
            [[books]]
            book = "Rev"
            [[books]]
            book = "rev"
        "#;
        assert!(matches!(
            OffsetTables::from_toml_str(duplicate),
            Err(VersificationError::TableFormat(_))
        ));

        let bad_bound = r#"
            [[books]]
            book = "Rev"
            ranges = [{ start = "12", end = "22:21", offset = 1 }]
        "#;
        assert!(matches!(
            OffsetTables::from_toml_str(bad_bound),
            Err(VersificationError::InvalidReference(_))
        ));
    }

    #[test]
    fn test_books_without_ranges_have_no_table() {
        let tables = OffsetTables::from_toml_str("[[books]]\nbook = \"Matt\"\n").unwrap();
        assert!(tables.is_empty());
        assert!(tables.get(BookCode::Matthew).is_none());

        let tables = OffsetTables::from_tables([
            BookOffsetTable::new(BookCode::Matthew, vec![]),
            BookOffsetTable::new(
                BookCode::Revelation,
                vec![OffsetRange::new(12, 17, 22, 21, 1)],
            ),
        ])
        .unwrap();
        assert_eq!(tables.len(), 1);
        assert!(tables.get(BookCode::Matthew).is_none());
    }

    #[test]
    fn test_builtin_tables_survive_toml_dump() {
        let dumped = OffsetTables::builtin().to_toml_string().unwrap();
        let reloaded = OffsetTables::from_toml_str(&dumped).unwrap();
        assert_eq!(&reloaded, OffsetTables::builtin());
    }
}

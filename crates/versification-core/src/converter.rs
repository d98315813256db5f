//! Conversion between ENGLISH and HEBREW absolute verse numbers
//!
//! The offset lookup is not itself versification-aware: both directions
//! consult the table with the same `(chapter, verse_nr)` pair and only the
//! sign of the correction differs. Stored absolute numbers throughout the
//! tagging and cross-reference data depend on exactly this behavior.

use crate::book::BookCode;
use crate::error::VersificationError;
use crate::location::{AbsoluteVerseNumbering, VerseLocation};
use crate::system::VersificationSystem;
use crate::table::{BookOffsetTable, OffsetTables};

/// Stateless converter over an immutable set of offset tables
#[derive(Debug, Clone, Copy)]
pub struct VersificationConverter<'a> {
    tables: &'a OffsetTables,
}

impl VersificationConverter<'static> {
    /// Converter over the compiled-in tables
    pub fn builtin() -> Self {
        Self::new(OffsetTables::builtin())
    }
}

impl Default for VersificationConverter<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> VersificationConverter<'a> {
    pub fn new(tables: &'a OffsetTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'a OffsetTables {
        self.tables
    }

    /// Offset table of a book, `None` when both systems agree throughout
    pub fn offset_table(&self, book: BookCode) -> Option<&'a BookOffsetTable> {
        self.tables.get(book)
    }

    /// Case-insensitive table lookup by book code
    ///
    /// Unknown codes are treated like books without corrections.
    pub fn lookup_offset_table(&self, code: &str) -> Option<&'a BookOffsetTable> {
        BookCode::parse_code(code).and_then(|book| self.offset_table(book))
    }

    /// Offset of the first range containing the location, 0 if none does
    pub fn offset_for_location(&self, book: BookCode, chapter: u32, verse_nr: u32) -> i64 {
        self.offset_table(book)
            .map(|table| i64::from(table.offset_for(chapter, verse_nr)))
            .unwrap_or(0)
    }

    /// Like [`Self::offset_for_location`], with unknown codes yielding 0
    pub fn offset_for_code(&self, code: &str, chapter: u32, verse_nr: u32) -> i64 {
        match BookCode::parse_code(code) {
            Some(book) => self.offset_for_location(book, chapter, verse_nr),
            None => {
                tracing::trace!("No offset table for unknown book code {:?}", code);
                0
            }
        }
    }

    /// HEBREW absolute number of a verse given its ENGLISH absolute number
    ///
    /// # Arguments
    ///
    /// * `book` - Book holding the verse
    /// * `absolute_verse_nr_eng` - ENGLISH absolute verse number
    /// * `chapter`, `verse_nr` - Location used for the offset lookup
    ///
    /// Results saturate at the bounds of `i64`; use
    /// [`Self::checked_numbering_for`] to reject such inputs instead.
    pub fn absolute_verse_nr_heb_from_eng(
        &self,
        book: BookCode,
        absolute_verse_nr_eng: i64,
        chapter: u32,
        verse_nr: u32,
    ) -> i64 {
        absolute_verse_nr_eng.saturating_add(self.offset_for_location(book, chapter, verse_nr))
    }

    /// ENGLISH absolute number of a verse given its HEBREW absolute number
    ///
    /// The offset is looked up with the same `(chapter, verse_nr)` pair as in
    /// [`Self::absolute_verse_nr_heb_from_eng`] and subtracted. Results
    /// saturate at the bounds of `i64`.
    pub fn absolute_verse_nr_eng_from_heb(
        &self,
        book: BookCode,
        absolute_verse_nr_heb: i64,
        chapter: u32,
        verse_nr: u32,
    ) -> i64 {
        absolute_verse_nr_heb.saturating_sub(self.offset_for_location(book, chapter, verse_nr))
    }

    /// Both absolute numbers of a verse, given its number in `system`
    ///
    /// The book-level pseudo-verse (chapter 0, verse 0) is numbered 0 in both
    /// systems regardless of `absolute_verse_nr`.
    pub fn compute_both_absolute_numbers(
        &self,
        book: BookCode,
        system: VersificationSystem,
        absolute_verse_nr: i64,
        chapter: u32,
        verse_nr: u32,
    ) -> AbsoluteVerseNumbering {
        if chapter == 0 && verse_nr == 0 {
            return AbsoluteVerseNumbering::default();
        }

        match system {
            VersificationSystem::Hebrew => AbsoluteVerseNumbering {
                absolute_verse_nr_eng: self.absolute_verse_nr_eng_from_heb(
                    book,
                    absolute_verse_nr,
                    chapter,
                    verse_nr,
                ),
                absolute_verse_nr_heb: absolute_verse_nr,
            },
            VersificationSystem::English => AbsoluteVerseNumbering {
                absolute_verse_nr_eng: absolute_verse_nr,
                absolute_verse_nr_heb: self.absolute_verse_nr_heb_from_eng(
                    book,
                    absolute_verse_nr,
                    chapter,
                    verse_nr,
                ),
            },
        }
    }

    /// [`Self::compute_both_absolute_numbers`] for a parsed location
    pub fn numbering_for(
        &self,
        location: &VerseLocation,
        system: VersificationSystem,
        absolute_verse_nr: i64,
    ) -> AbsoluteVerseNumbering {
        self.compute_both_absolute_numbers(
            location.book,
            system,
            absolute_verse_nr,
            location.chapter,
            location.verse_nr,
        )
    }

    /// Strict variant of [`Self::compute_both_absolute_numbers`] for diagnostics
    ///
    /// # Errors
    ///
    /// Returns [`VersificationError::InvalidInput`] if:
    /// - `absolute_verse_nr` is negative
    /// - applying the offset would leave the range of `i64`
    pub fn checked_numbering_for(
        &self,
        book: BookCode,
        system: VersificationSystem,
        absolute_verse_nr: i64,
        chapter: u32,
        verse_nr: u32,
    ) -> Result<AbsoluteVerseNumbering, VersificationError> {
        if absolute_verse_nr < 0 {
            return Err(VersificationError::InvalidInput(format!(
                "negative absolute verse number {} for {} {}:{}",
                absolute_verse_nr, book, chapter, verse_nr
            )));
        }
        if chapter == 0 && verse_nr == 0 {
            return Ok(AbsoluteVerseNumbering::default());
        }

        let offset = self.offset_for_location(book, chapter, verse_nr);
        let other = match system {
            VersificationSystem::English => absolute_verse_nr.checked_add(offset),
            VersificationSystem::Hebrew => absolute_verse_nr.checked_sub(offset),
        }
        .ok_or_else(|| {
            VersificationError::InvalidInput(format!(
                "absolute verse number {} for {} {}:{} is out of range",
                absolute_verse_nr, book, chapter, verse_nr
            ))
        })?;

        Ok(match system {
            VersificationSystem::English => AbsoluteVerseNumbering::new(absolute_verse_nr, other),
            VersificationSystem::Hebrew => AbsoluteVerseNumbering::new(other, absolute_verse_nr),
        })
    }

    /// Like [`Self::checked_numbering_for`], resolving the book from its code
    ///
    /// # Errors
    ///
    /// Returns [`VersificationError::UnknownBook`] for an unrecognized code,
    /// otherwise the errors of [`Self::checked_numbering_for`].
    pub fn checked_numbering(
        &self,
        code: &str,
        system: VersificationSystem,
        absolute_verse_nr: i64,
        chapter: u32,
        verse_nr: u32,
    ) -> Result<AbsoluteVerseNumbering, VersificationError> {
        let book = BookCode::parse_code(code)
            .ok_or_else(|| VersificationError::UnknownBook(code.to_string()))?;
        self.checked_numbering_for(book, system, absolute_verse_nr, chapter, verse_nr)
    }
}

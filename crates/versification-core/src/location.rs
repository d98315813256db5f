use serde::{Deserialize, Serialize};

use crate::book::BookCode;
use crate::error::VersificationError;
use crate::system::VersificationSystem;
use crate::table::parse_chapter_verse;

/// A verse position within a book
///
/// Chapter 0 verse 0 is the book-level pseudo-verse used to anchor book
/// introductions and notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseLocation {
    pub book: BookCode,
    pub chapter: u32,
    pub verse_nr: u32,
}

impl VerseLocation {
    pub fn new(book: BookCode, chapter: u32, verse_nr: u32) -> Self {
        Self {
            book,
            chapter,
            verse_nr,
        }
    }

    /// The pseudo-verse anchoring book-level notes
    pub fn book_level(book: BookCode) -> Self {
        Self::new(book, 0, 0)
    }

    pub fn is_book_level(&self) -> bool {
        self.chapter == 0 && self.verse_nr == 0
    }

    /// Parse a reference like "Ps 3:2", "1 Samuel 21:1" or "psa 13:6"
    pub fn parse(s: &str) -> Result<Self, VersificationError> {
        let s = s.trim();
        let (book, chapter_verse) = s
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| VersificationError::InvalidReference(s.to_string()))?;

        let book = book.parse::<BookCode>()?;
        let (chapter, verse_nr) = parse_chapter_verse(chapter_verse)
            .map_err(|_| VersificationError::InvalidReference(s.to_string()))?;

        Ok(Self::new(book, chapter, verse_nr))
    }
}

impl std::fmt::Display for VerseLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse_nr)
    }
}

impl std::str::FromStr for VerseLocation {
    type Err = VersificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Absolute verse numbers of one verse in both systems
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbsoluteVerseNumbering {
    pub absolute_verse_nr_eng: i64,
    pub absolute_verse_nr_heb: i64,
}

impl AbsoluteVerseNumbering {
    pub fn new(absolute_verse_nr_eng: i64, absolute_verse_nr_heb: i64) -> Self {
        Self {
            absolute_verse_nr_eng,
            absolute_verse_nr_heb,
        }
    }

    /// Number expressed in the given system
    pub fn in_system(&self, system: VersificationSystem) -> i64 {
        match system {
            VersificationSystem::English => self.absolute_verse_nr_eng,
            VersificationSystem::Hebrew => self.absolute_verse_nr_heb,
        }
    }
}

//! Canonical book codes
//!
//! Every book is identified by its OSIS short code (`Gen`, `1Sam`, `Ps`, ...).
//! Parsing is case-insensitive and also accepts the three-letter codes used by
//! SWORD/USFM tooling (`1Sa`, `Psa`, `2Co`, ...) and the English book name.

use serde::{Deserialize, Serialize};

use crate::error::VersificationError;

/// Books of the 66-book Protestant canon, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u8)]
pub enum BookCode {
    // Old Testament
    Genesis,
    Exodus,
    Leviticus,
    Numbers,
    Deuteronomy,
    Joshua,
    Judges,
    Ruth,
    FirstSamuel,
    SecondSamuel,
    FirstKings,
    SecondKings,
    FirstChronicles,
    SecondChronicles,
    Ezra,
    Nehemiah,
    Esther,
    Job,
    Psalms,
    Proverbs,
    Ecclesiastes,
    SongOfSolomon,
    Isaiah,
    Jeremiah,
    Lamentations,
    Ezekiel,
    Daniel,
    Hosea,
    Joel,
    Amos,
    Obadiah,
    Jonah,
    Micah,
    Nahum,
    Habakkuk,
    Zephaniah,
    Haggai,
    Zechariah,
    Malachi,
    // New Testament
    Matthew,
    Mark,
    Luke,
    John,
    Acts,
    Romans,
    FirstCorinthians,
    SecondCorinthians,
    Galatians,
    Ephesians,
    Philippians,
    Colossians,
    FirstThessalonians,
    SecondThessalonians,
    FirstTimothy,
    SecondTimothy,
    Titus,
    Philemon,
    Hebrews,
    James,
    FirstPeter,
    SecondPeter,
    FirstJohn,
    SecondJohn,
    ThirdJohn,
    Jude,
    Revelation,
}

/// Old or New Testament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Testament {
    Old,
    New,
}

struct BookInfo {
    code: &'static str,
    short: &'static str,
    name: &'static str,
}

const fn info(code: &'static str, short: &'static str, name: &'static str) -> BookInfo {
    BookInfo { code, short, name }
}

// Indexed by discriminant.
const BOOK_INFO: [BookInfo; 66] = [
    info("Gen", "GEN", "Genesis"),
    info("Exod", "EXO", "Exodus"),
    info("Lev", "LEV", "Leviticus"),
    info("Num", "NUM", "Numbers"),
    info("Deut", "DEU", "Deuteronomy"),
    info("Josh", "JOS", "Joshua"),
    info("Judg", "JDG", "Judges"),
    info("Ruth", "RUT", "Ruth"),
    info("1Sam", "1SA", "1 Samuel"),
    info("2Sam", "2SA", "2 Samuel"),
    info("1Kgs", "1KI", "1 Kings"),
    info("2Kgs", "2KI", "2 Kings"),
    info("1Chr", "1CH", "1 Chronicles"),
    info("2Chr", "2CH", "2 Chronicles"),
    info("Ezra", "EZR", "Ezra"),
    info("Neh", "NEH", "Nehemiah"),
    info("Esth", "EST", "Esther"),
    info("Job", "JOB", "Job"),
    info("Ps", "PSA", "Psalms"),
    info("Prov", "PRO", "Proverbs"),
    info("Eccl", "ECC", "Ecclesiastes"),
    info("Song", "SNG", "Song of Solomon"),
    info("Isa", "ISA", "Isaiah"),
    info("Jer", "JER", "Jeremiah"),
    info("Lam", "LAM", "Lamentations"),
    info("Ezek", "EZK", "Ezekiel"),
    info("Dan", "DAN", "Daniel"),
    info("Hos", "HOS", "Hosea"),
    info("Joel", "JOL", "Joel"),
    info("Amos", "AMO", "Amos"),
    info("Obad", "OBA", "Obadiah"),
    info("Jonah", "JON", "Jonah"),
    info("Mic", "MIC", "Micah"),
    info("Nah", "NAM", "Nahum"),
    info("Hab", "HAB", "Habakkuk"),
    info("Zeph", "ZEP", "Zephaniah"),
    info("Hag", "HAG", "Haggai"),
    info("Zech", "ZEC", "Zechariah"),
    info("Mal", "MAL", "Malachi"),
    info("Matt", "MAT", "Matthew"),
    info("Mark", "MRK", "Mark"),
    info("Luke", "LUK", "Luke"),
    info("John", "JHN", "John"),
    info("Acts", "ACT", "Acts"),
    info("Rom", "ROM", "Romans"),
    info("1Cor", "1CO", "1 Corinthians"),
    info("2Cor", "2CO", "2 Corinthians"),
    info("Gal", "GAL", "Galatians"),
    info("Eph", "EPH", "Ephesians"),
    info("Phil", "PHP", "Philippians"),
    info("Col", "COL", "Colossians"),
    info("1Thess", "1TH", "1 Thessalonians"),
    info("2Thess", "2TH", "2 Thessalonians"),
    info("1Tim", "1TI", "1 Timothy"),
    info("2Tim", "2TI", "2 Timothy"),
    info("Titus", "TIT", "Titus"),
    info("Phlm", "PHM", "Philemon"),
    info("Heb", "HEB", "Hebrews"),
    info("Jas", "JAS", "James"),
    info("1Pet", "1PE", "1 Peter"),
    info("2Pet", "2PE", "2 Peter"),
    info("1John", "1JN", "1 John"),
    info("2John", "2JN", "2 John"),
    info("3John", "3JN", "3 John"),
    info("Jude", "JUD", "Jude"),
    info("Rev", "REV", "Revelation"),
];

impl BookCode {
    /// All books in canonical order
    pub const ALL: [BookCode; 66] = [
        BookCode::Genesis,
        BookCode::Exodus,
        BookCode::Leviticus,
        BookCode::Numbers,
        BookCode::Deuteronomy,
        BookCode::Joshua,
        BookCode::Judges,
        BookCode::Ruth,
        BookCode::FirstSamuel,
        BookCode::SecondSamuel,
        BookCode::FirstKings,
        BookCode::SecondKings,
        BookCode::FirstChronicles,
        BookCode::SecondChronicles,
        BookCode::Ezra,
        BookCode::Nehemiah,
        BookCode::Esther,
        BookCode::Job,
        BookCode::Psalms,
        BookCode::Proverbs,
        BookCode::Ecclesiastes,
        BookCode::SongOfSolomon,
        BookCode::Isaiah,
        BookCode::Jeremiah,
        BookCode::Lamentations,
        BookCode::Ezekiel,
        BookCode::Daniel,
        BookCode::Hosea,
        BookCode::Joel,
        BookCode::Amos,
        BookCode::Obadiah,
        BookCode::Jonah,
        BookCode::Micah,
        BookCode::Nahum,
        BookCode::Habakkuk,
        BookCode::Zephaniah,
        BookCode::Haggai,
        BookCode::Zechariah,
        BookCode::Malachi,
        BookCode::Matthew,
        BookCode::Mark,
        BookCode::Luke,
        BookCode::John,
        BookCode::Acts,
        BookCode::Romans,
        BookCode::FirstCorinthians,
        BookCode::SecondCorinthians,
        BookCode::Galatians,
        BookCode::Ephesians,
        BookCode::Philippians,
        BookCode::Colossians,
        BookCode::FirstThessalonians,
        BookCode::SecondThessalonians,
        BookCode::FirstTimothy,
        BookCode::SecondTimothy,
        BookCode::Titus,
        BookCode::Philemon,
        BookCode::Hebrews,
        BookCode::James,
        BookCode::FirstPeter,
        BookCode::SecondPeter,
        BookCode::FirstJohn,
        BookCode::SecondJohn,
        BookCode::ThirdJohn,
        BookCode::Jude,
        BookCode::Revelation,
    ];

    fn info(&self) -> &'static BookInfo {
        &BOOK_INFO[*self as usize]
    }

    /// Canonical (OSIS) short code, e.g. "1Sam"
    pub fn code(&self) -> &'static str {
        self.info().code
    }

    /// Three-letter code used by SWORD/USFM tooling, e.g. "1SA"
    pub fn short_code(&self) -> &'static str {
        self.info().short
    }

    /// English book name
    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Position in the canon, starting at 1
    pub fn number(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn testament(&self) -> Testament {
        if *self <= BookCode::Malachi {
            Testament::Old
        } else {
            Testament::New
        }
    }

    /// Parse from canonical code, three-letter code or English name (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        let wanted = squash(s);
        if wanted.is_empty() {
            return None;
        }

        // "Psalm 23" reads more naturally than "Psalms 23"
        if wanted == "psalm" {
            return Some(BookCode::Psalms);
        }

        BookCode::ALL.iter().copied().find(|book| {
            let info = book.info();
            wanted == squash(info.code) || wanted == squash(info.short) || wanted == squash(info.name)
        })
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

impl std::fmt::Display for BookCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for BookCode {
    type Err = VersificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookCode::parse_code(s).ok_or_else(|| VersificationError::UnknownBook(s.to_string()))
    }
}

impl TryFrom<String> for BookCode {
    type Error = VersificationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<BookCode> for &'static str {
    fn from(book: BookCode) -> Self {
        book.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_parsing() {
        assert_eq!(BookCode::parse_code("1Sam"), Some(BookCode::FirstSamuel));
        assert_eq!(BookCode::parse_code("1sam"), Some(BookCode::FirstSamuel));
        assert_eq!(BookCode::parse_code("1Sa"), Some(BookCode::FirstSamuel));
        assert_eq!(BookCode::parse_code("1 Samuel"), Some(BookCode::FirstSamuel));
        assert_eq!(BookCode::parse_code("PS"), Some(BookCode::Psalms));
        assert_eq!(BookCode::parse_code("Psa"), Some(BookCode::Psalms));
        assert_eq!(BookCode::parse_code("psalm"), Some(BookCode::Psalms));
        assert_eq!(BookCode::parse_code("song of solomon"), Some(BookCode::SongOfSolomon));
        assert_eq!(BookCode::parse_code("Jud"), Some(BookCode::Jude));
        assert_eq!(BookCode::parse_code("Judg"), Some(BookCode::Judges));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(BookCode::parse_code("Xyz"), None);
        assert_eq!(BookCode::parse_code(""), None);
        assert_eq!(BookCode::parse_code("   "), None);
        assert!("Xyz".parse::<BookCode>().is_err());
    }

    #[test]
    fn test_codes_round_trip_and_are_unique() {
        for book in BookCode::ALL {
            assert_eq!(BookCode::parse_code(book.code()), Some(book));
            assert_eq!(BookCode::parse_code(book.short_code()), Some(book));
            assert_eq!(BookCode::parse_code(book.name()), Some(book));
        }
    }

    #[test]
    fn test_canon_order() {
        for (i, book) in BookCode::ALL.iter().enumerate() {
            assert_eq!(book.number() as usize, i + 1);
        }
        assert_eq!(BookCode::Malachi.testament(), Testament::Old);
        assert_eq!(BookCode::Matthew.testament(), Testament::New);
        assert_eq!(BookCode::Revelation.number(), 66);
    }

    #[test]
    fn test_serde_uses_canonical_code() {
        let json = serde_json::to_string(&BookCode::SecondKings).unwrap();
        assert_eq!(json, "\"2Kgs\"");

        let parsed: BookCode = serde_json::from_str("\"2ki\"").unwrap();
        assert_eq!(parsed, BookCode::SecondKings);

        assert!(serde_json::from_str::<BookCode>("\"Xyz\"").is_err());
    }
}

//! Built-in offset tables
//!
//! Values are `(start_chapter, start_verse, end_chapter, end_verse, offset)`.
//! The Psalms table is anchored to ENGLISH chapter/verse boundaries; see
//! [`crate::psalms`] for the reference data it is checked against.

use crate::book::BookCode;
use crate::table::OffsetRange;

pub const FIRST_SAMUEL: &[OffsetRange] = &[OffsetRange::new(21, 1, 26, 25, 1)];

pub const FIRST_KINGS: &[OffsetRange] = &[OffsetRange::new(22, 44, 22, 54, 1)];

pub const SECOND_KINGS: &[OffsetRange] = &[OffsetRange::new(15, 39, 25, 30, 1)];

pub const FIRST_CHRONICLES: &[OffsetRange] = &[OffsetRange::new(12, 5, 29, 30, 1)];

pub const NEHEMIAH: &[OffsetRange] = &[OffsetRange::new(9, 38, 13, 31, -1)];

pub const ISAIAH: &[OffsetRange] = &[OffsetRange::new(64, 1, 66, 24, -1)];

pub const ACTS: &[OffsetRange] = &[OffsetRange::new(19, 41, 28, 31, -1)];

pub const SECOND_CORINTHIANS: &[OffsetRange] = &[OffsetRange::new(13, 13, 13, 14, -1)];

pub const REVELATION: &[OffsetRange] = &[OffsetRange::new(12, 17, 22, 21, 1)];

/// One entry per superscribed psalm, covering it and the untitled psalms after it.
/// Psalm 13 is split because Hebrew 13:6 holds both English 13:5 and 13:6.
pub const PSALMS: &[OffsetRange] = &[
    OffsetRange::new(3, 1, 3, 8, 1),
    OffsetRange::new(4, 1, 4, 8, 2),
    OffsetRange::new(5, 1, 5, 12, 3),
    OffsetRange::new(6, 1, 6, 10, 4),
    OffsetRange::new(7, 1, 7, 17, 5),
    OffsetRange::new(8, 1, 8, 9, 6),
    OffsetRange::new(9, 1, 11, 7, 7),
    OffsetRange::new(12, 1, 12, 8, 8),
    OffsetRange::new(13, 1, 13, 5, 9),
    OffsetRange::new(13, 6, 17, 15, 8),
    OffsetRange::new(18, 1, 18, 50, 9),
    OffsetRange::new(19, 1, 19, 14, 10),
    OffsetRange::new(20, 1, 20, 9, 11),
    OffsetRange::new(21, 1, 21, 13, 12),
    OffsetRange::new(22, 1, 29, 11, 13),
    OffsetRange::new(30, 1, 30, 12, 14),
    OffsetRange::new(31, 1, 33, 22, 15),
    OffsetRange::new(34, 1, 35, 28, 16),
    OffsetRange::new(36, 1, 37, 40, 17),
    OffsetRange::new(38, 1, 38, 22, 18),
    OffsetRange::new(39, 1, 39, 13, 19),
    OffsetRange::new(40, 1, 40, 17, 20),
    OffsetRange::new(41, 1, 41, 13, 21),
    OffsetRange::new(42, 1, 43, 5, 22),
    OffsetRange::new(44, 1, 44, 26, 23),
    OffsetRange::new(45, 1, 45, 17, 24),
    OffsetRange::new(46, 1, 46, 11, 25),
    OffsetRange::new(47, 1, 47, 9, 26),
    OffsetRange::new(48, 1, 48, 14, 27),
    OffsetRange::new(49, 1, 50, 23, 28),
    OffsetRange::new(51, 1, 51, 19, 30),
    OffsetRange::new(52, 1, 52, 9, 32),
    OffsetRange::new(53, 1, 53, 6, 33),
    OffsetRange::new(54, 1, 54, 7, 35),
    OffsetRange::new(55, 1, 55, 23, 36),
    OffsetRange::new(56, 1, 56, 13, 37),
    OffsetRange::new(57, 1, 57, 11, 38),
    OffsetRange::new(58, 1, 58, 11, 39),
    OffsetRange::new(59, 1, 59, 17, 40),
    OffsetRange::new(60, 1, 60, 12, 42),
    OffsetRange::new(61, 1, 61, 8, 43),
    OffsetRange::new(62, 1, 62, 12, 44),
    OffsetRange::new(63, 1, 63, 11, 45),
    OffsetRange::new(64, 1, 64, 10, 46),
    OffsetRange::new(65, 1, 66, 20, 47),
    OffsetRange::new(67, 1, 67, 7, 48),
    OffsetRange::new(68, 1, 68, 35, 49),
    OffsetRange::new(69, 1, 69, 36, 50),
    OffsetRange::new(70, 1, 74, 23, 51),
    OffsetRange::new(75, 1, 75, 10, 52),
    OffsetRange::new(76, 1, 76, 12, 53),
    OffsetRange::new(77, 1, 79, 13, 54),
    OffsetRange::new(80, 1, 80, 19, 55),
    OffsetRange::new(81, 1, 82, 8, 56),
    OffsetRange::new(83, 1, 83, 18, 57),
    OffsetRange::new(84, 1, 84, 12, 58),
    OffsetRange::new(85, 1, 87, 7, 59),
    OffsetRange::new(88, 1, 88, 18, 60),
    OffsetRange::new(89, 1, 91, 16, 61),
    OffsetRange::new(92, 1, 101, 8, 62),
    OffsetRange::new(102, 1, 107, 43, 63),
    OffsetRange::new(108, 1, 139, 24, 64),
    OffsetRange::new(140, 1, 141, 10, 65),
    OffsetRange::new(142, 1, 150, 6, 66),
];

pub const BUILTIN_OFFSETS: &[(BookCode, &[OffsetRange])] = &[
    (BookCode::FirstSamuel, FIRST_SAMUEL),
    (BookCode::FirstKings, FIRST_KINGS),
    (BookCode::SecondKings, SECOND_KINGS),
    (BookCode::FirstChronicles, FIRST_CHRONICLES),
    (BookCode::Nehemiah, NEHEMIAH),
    (BookCode::Psalms, PSALMS),
    (BookCode::Isaiah, ISAIAH),
    (BookCode::Acts, ACTS),
    (BookCode::SecondCorinthians, SECOND_CORINTHIANS),
    (BookCode::Revelation, REVELATION),
];

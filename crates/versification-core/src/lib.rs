//! Versification conversion between ENGLISH and HEBREW verse numbering
//!
//! Bible editions disagree on how verses are numbered: Masoretic (HEBREW)
//! editions count most psalm superscriptions as verses and split a handful of
//! chapters differently from KJV-style (ENGLISH) editions. This crate maps
//! absolute verse numbers between the two using per-book offset tables.
//!
//! # Example
//!
//! ```
//! use versification_core::{BookCode, VersificationConverter, VersificationSystem};
//!
//! let converter = VersificationConverter::builtin();
//! let numbering = converter.compute_both_absolute_numbers(
//!     BookCode::Psalms,
//!     VersificationSystem::English,
//!     10,
//!     3,
//!     2,
//! );
//! assert_eq!(numbering.absolute_verse_nr_heb, 11);
//! ```

pub mod book;
pub mod converter;
pub mod data;
pub mod error;
pub mod location;
pub mod psalms;
pub mod system;
pub mod table;

pub use book::{BookCode, Testament};
pub use converter::VersificationConverter;
pub use error::VersificationError;
pub use location::{AbsoluteVerseNumbering, VerseLocation};
pub use system::VersificationSystem;
pub use table::{is_in_range, BookOffsetTable, OffsetRange, OffsetTables};

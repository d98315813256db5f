//! Psalms reference data
//!
//! Hebrew numbering counts most psalm superscriptions ("A Psalm of David")
//! as verses of their own, so Hebrew Psalms have 2527 verses against 2461 in
//! English. This module keeps the per-psalm data behind the built-in Psalms
//! offset table and derives the table from it in either reference frame.

use crate::table::OffsetRange;

/// Number of psalms
pub const PSALM_COUNT: u32 = 150;

/// English (KJV) verse count of each psalm, index 0 = Psalm 1
pub const ENGLISH_VERSE_COUNTS: [u32; 150] = [
    6, 12, 8, 8, 12, 10, 17, 9, 20, 18, // 1-10
    7, 8, 6, 7, 5, 11, 15, 50, 14, 9, // 11-20
    13, 31, 6, 10, 22, 12, 14, 9, 11, 12, // 21-30
    24, 11, 22, 22, 28, 12, 40, 22, 13, 17, // 31-40
    13, 11, 5, 26, 17, 11, 9, 14, 20, 23, // 41-50
    19, 9, 6, 7, 23, 13, 11, 11, 17, 12, // 51-60
    8, 12, 11, 10, 13, 20, 7, 35, 36, 5, // 61-70
    24, 20, 28, 23, 10, 12, 20, 72, 13, 19, // 71-80
    16, 8, 18, 12, 13, 17, 7, 18, 52, 17, // 81-90
    16, 15, 5, 23, 11, 13, 12, 9, 9, 5, // 91-100
    8, 28, 22, 35, 45, 48, 43, 13, 31, 7, // 101-110
    10, 10, 9, 8, 18, 19, 2, 29, 176, 7, // 111-120
    8, 9, 4, 8, 5, 6, 5, 6, 8, 8, // 121-130
    3, 18, 3, 3, 21, 26, 9, 8, 24, 13, // 131-140
    10, 7, 12, 15, 21, 10, 20, 14, 9, 6, // 141-150
];

/// `(psalm, verses)`: superscriptions numbered as separate Hebrew verses
pub const SUPERSCRIPTION_VERSES: &[(u32, u32)] = &[
    (3, 1),
    (4, 1),
    (5, 1),
    (6, 1),
    (7, 1),
    (8, 1),
    (9, 1),
    (12, 1),
    (13, 1),
    (18, 1),
    (19, 1),
    (20, 1),
    (21, 1),
    (22, 1),
    (30, 1),
    (31, 1),
    (34, 1),
    (36, 1),
    (38, 1),
    (39, 1),
    (40, 1),
    (41, 1),
    (42, 1),
    (44, 1),
    (45, 1),
    (46, 1),
    (47, 1),
    (48, 1),
    (49, 1),
    (51, 2),
    (52, 2),
    (53, 1),
    (54, 2),
    (55, 1),
    (56, 1),
    (57, 1),
    (58, 1),
    (59, 1),
    (60, 2),
    (61, 1),
    (62, 1),
    (63, 1),
    (64, 1),
    (65, 1),
    (67, 1),
    (68, 1),
    (69, 1),
    (70, 1),
    (75, 1),
    (76, 1),
    (77, 1),
    (80, 1),
    (81, 1),
    (83, 1),
    (84, 1),
    (85, 1),
    (88, 1),
    (89, 1),
    (92, 1),
    (102, 1),
    (108, 1),
    (140, 1),
    (142, 1),
];

/// `(psalm, verse)`: English verse joined with the next one into a single Hebrew verse
pub const JOINED_VERSES: &[(u32, u32)] = &[(13, 5)];

pub fn english_verse_count(psalm: u32) -> Option<u32> {
    if psalm == 0 || psalm > PSALM_COUNT {
        return None;
    }
    Some(ENGLISH_VERSE_COUNTS[psalm as usize - 1])
}

pub fn superscription_verses(psalm: u32) -> u32 {
    SUPERSCRIPTION_VERSES
        .iter()
        .find(|(p, _)| *p == psalm)
        .map(|(_, n)| *n)
        .unwrap_or(0)
}

/// Joins in `psalm` whose second English verse is at or before `verse`
fn joins_through(psalm: u32, verse: u32) -> u32 {
    JOINED_VERSES
        .iter()
        .filter(|(p, v)| *p == psalm && *v < verse)
        .count() as u32
}

pub fn hebrew_verse_count(psalm: u32) -> Option<u32> {
    let english = english_verse_count(psalm)?;
    Some(english + superscription_verses(psalm) - joins_through(psalm, english))
}

/// Hebrew chapter/verse holding an English Psalms location
///
/// Returns `None` outside the Psalter or past the end of a psalm.
pub fn hebrew_location(chapter: u32, verse: u32) -> Option<(u32, u32)> {
    let count = english_verse_count(chapter)?;
    if verse == 0 || verse > count {
        return None;
    }
    let hebrew = verse + superscription_verses(chapter) - joins_through(chapter, verse);
    Some((chapter, hebrew))
}

/// Running verse number within the English Psalter
pub fn english_absolute(chapter: u32, verse: u32) -> Option<i64> {
    let count = english_verse_count(chapter)?;
    if verse == 0 || verse > count {
        return None;
    }
    let before: u32 = ENGLISH_VERSE_COUNTS[..chapter as usize - 1].iter().sum();
    Some(i64::from(before + verse))
}

/// Running verse number within the Hebrew Psalter
pub fn hebrew_absolute(chapter: u32, verse: u32) -> Option<i64> {
    let count = hebrew_verse_count(chapter)?;
    if verse == 0 || verse > count {
        return None;
    }
    let before: u32 = (1..chapter).filter_map(hebrew_verse_count).sum();
    Some(i64::from(before + verse))
}

/// Offset ranges keyed to English chapter/verse boundaries
///
/// Consecutive verses sharing an offset collapse into one range; stretches
/// with offset 0 are omitted.
pub fn english_anchored_ranges() -> Vec<OffsetRange> {
    let mut runs = RunBuilder::default();
    let mut english = 0i64;
    for chapter in 1..=PSALM_COUNT {
        for verse in 1..=ENGLISH_VERSE_COUNTS[chapter as usize - 1] {
            english += 1;
            if let Some(hebrew) =
                hebrew_location(chapter, verse).and_then(|(c, v)| hebrew_absolute(c, v))
            {
                runs.push(chapter, verse, hebrew - english);
            }
        }
    }
    runs.finish()
}

/// Offset ranges keyed to Hebrew chapter/verse boundaries
///
/// A Hebrew verse takes the offset of the first English verse it holds;
/// superscription-only verses take the offset of the psalm's first verse.
pub fn hebrew_anchored_ranges() -> Vec<OffsetRange> {
    let mut runs = RunBuilder::default();
    for chapter in 1..=PSALM_COUNT {
        let english_count = ENGLISH_VERSE_COUNTS[chapter as usize - 1];
        let mut offsets = vec![None; hebrew_verse_count(chapter).unwrap_or(0) as usize];

        for verse in (1..=english_count).rev() {
            if let (Some((c, hv)), Some(eng)) =
                (hebrew_location(chapter, verse), english_absolute(chapter, verse))
            {
                if let Some(heb) = hebrew_absolute(c, hv) {
                    offsets[hv as usize - 1] = Some(heb - eng);
                }
            }
        }

        let first = offsets.iter().flatten().next().copied().unwrap_or(0);
        for (i, offset) in offsets.iter().enumerate() {
            runs.push(chapter, i as u32 + 1, offset.unwrap_or(first));
        }
    }
    runs.finish()
}

#[derive(Default)]
struct RunBuilder {
    ranges: Vec<OffsetRange>,
    current: Option<OffsetRange>,
}

impl RunBuilder {
    fn push(&mut self, chapter: u32, verse: u32, offset: i64) {
        let offset = offset as i32;
        if let Some(run) = self.current.as_mut() {
            if run.offset == offset {
                run.end_chapter = chapter;
                run.end_verse = verse;
                return;
            }
        }
        self.flush();
        self.current = Some(OffsetRange::new(chapter, verse, chapter, verse, offset));
    }

    fn flush(&mut self) {
        if let Some(run) = self.current.take() {
            if run.offset != 0 {
                self.ranges.push(run);
            }
        }
    }

    fn finish(mut self) -> Vec<OffsetRange> {
        self.flush();
        self.ranges
    }
}

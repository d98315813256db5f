//! End-to-end command tests through the parsed CLI

use clap::Parser;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::fs;
use versification_core::BookCode;
use versify::config::Config;
use versify::Cli;

fn run(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(std::iter::once("versify").chain(args.iter().copied()))?;
    versify::run(&cli, &Config::default())
}

fn run_json(args: &[&str]) -> serde_json::Value {
    let mut full = vec!["--format", "json"];
    full.extend_from_slice(args);
    let output = run(&full).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn convert_english_psalm() {
    let value = run_json(&["convert", "Ps 3:2", "--abs", "10"]);
    assert_eq!(value["reference"], "Ps 3:2");
    assert_eq!(value["hebrew_reference"], "Ps 3:3");
    assert_eq!(value["numbering"]["absolute_verse_nr_eng"], 10);
    assert_eq!(value["numbering"]["absolute_verse_nr_heb"], 11);
    assert_eq!(value["offset"], 1);
}

#[test]
fn convert_hebrew_input() {
    let value = run_json(&["convert", "Rev 12:17", "--abs", "301", "--system", "heb"]);
    assert_eq!(value["system"], "HEBREW");
    assert_eq!(value["numbering"]["absolute_verse_nr_eng"], 300);
    assert!(value.get("hebrew_reference").is_none());
}

#[test]
fn convert_book_level_note() {
    let value = run_json(&["convert", "1Sam 0:0", "--abs", "55"]);
    assert_eq!(value["numbering"]["absolute_verse_nr_eng"], 0);
    assert_eq!(value["numbering"]["absolute_verse_nr_heb"], 0);
}

#[test]
fn convert_rejects_bad_input() {
    assert!(run(&["convert", "Xyz 1:1", "--abs", "1"]).is_err());
    assert!(run(&["convert", "Ps 3:2", "--abs", "-4"]).is_err());
    assert!(run(&["convert", "Ps 3:2", "--abs", "4", "--system", "latin"]).is_err());
}

#[test]
fn convert_rejects_numbers_past_i64() {
    let max = i64::MAX.to_string();
    assert!(run(&["convert", "Ps 3:2", "--abs", &max]).is_err());
    assert!(run(&["convert", "Neh 9:38", "--abs", &max, "--system", "hebrew"]).is_err());

    let value = run_json(&["convert", "Matt 1:1", "--abs", &max]);
    assert_eq!(value["numbering"]["absolute_verse_nr_heb"], i64::MAX);
}

#[test]
fn offset_reports_matched_range() {
    let value = run_json(&["offset", "psa 13:6"]);
    assert_eq!(value["offset"], 8);
    assert_eq!(value["matched_range"]["start_chapter"], 13);
    assert_eq!(value["matched_range"]["start_verse"], 6);

    let text = run(&["offset", "Matt 5:3"]).unwrap();
    assert_eq!(text, "Matt 5:3: offset 0 (no correction)\n");
}

#[test]
fn table_lists_ranges() {
    let text = run(&["table", "1 Samuel"]).unwrap();
    assert!(text.starts_with("1 Samuel (1Sam): 1 ranges"));
    assert!(text.contains("21:1-26:25 (+1)"));

    let text = run(&["table", "John"]).unwrap();
    assert!(text.contains("identical"));
}

#[test]
fn check_builtin_tables() {
    let value = run_json(&["check"]);
    assert_eq!(value["source"], "built-in");
    assert_eq!(value["valid"], true);
    assert_eq!(value["psalms_match_reference"], true);
    assert_eq!(value["books"].as_array().map(Vec::len), Some(10));
}

#[test]
fn custom_tables_replace_builtin() {
    let dir = std::env::temp_dir().join(format!("versify-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("tables.toml");
    fs::write(
        &path,
        "[[books]]\nbook = \"Matt\"\nranges = [{ start = \"1:1\", end = \"2:23\", offset = 3 }]\n",
    )
    .unwrap();
    let path = path.to_string_lossy().to_string();

    let value = run_json(&["--tables", &path, "offset", "Matt 2:1"]);
    assert_eq!(value["offset"], 3);

    let value = run_json(&["--tables", &path, "offset", "Ps 3:2"]);
    assert_eq!(value["offset"], 0);

    let value = run_json(&["--tables", &path, "check"]);
    assert_eq!(value["valid"], true);
    assert!(value.get("psalms_match_reference").is_none());

    fs::remove_dir_all(&dir).unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn convert_applies_the_reported_offset(
        book in (0usize..66).prop_map(|i| BookCode::ALL[i]),
        chapter in 1u32..160,
        verse in 1u32..180,
        abs in 0i64..1_000_000,
        hebrew in any::<bool>()
    ) {
        let reference = format!("{} {}:{}", book.code(), chapter, verse);
        let abs_arg = abs.to_string();
        let system = if hebrew { "hebrew" } else { "english" };

        let value = run_json(&["convert", &reference, "--abs", &abs_arg, "--system", system]);
        let eng = value["numbering"]["absolute_verse_nr_eng"].as_i64().unwrap();
        let heb = value["numbering"]["absolute_verse_nr_heb"].as_i64().unwrap();
        let offset = value["offset"].as_i64().unwrap();

        prop_assert_eq!(heb - eng, offset);
        prop_assert_eq!(if hebrew { heb } else { eng }, abs);

        let offset_value = run_json(&["offset", &reference]);
        prop_assert_eq!(offset_value["offset"].as_i64(), Some(offset));
    }
}

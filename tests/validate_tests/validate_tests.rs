//! Tests for the Validator
//!
//! These tests verify:
//! - Positive-integer acceptance rule (digits only, > 0)
//! - File variant returns None instead of failing
//! - Interactive re-prompting and end-of-input handling
//! - Name/continent normalization

use std::io::{Cursor, ErrorKind};

use countrydb::validate::{
    normalize_text, parse_file_integer, parse_positive_integer, prompt_line,
    prompt_positive_integer,
};
use countrydb::StoreError;

// =============================================================================
// Positive Integer Tests
// =============================================================================

#[test]
fn test_accepts_plain_digits() {
    assert_eq!(parse_positive_integer("1"), Some(1));
    assert_eq!(parse_positive_integer("45376763"), Some(45_376_763));
    assert_eq!(parse_positive_integer("007"), Some(7));
}

#[test]
fn test_rejects_zero() {
    assert_eq!(parse_positive_integer("0"), None);
    assert_eq!(parse_positive_integer("0000"), None);
}

#[test]
fn test_rejects_empty_and_whitespace() {
    assert_eq!(parse_positive_integer(""), None);
    assert_eq!(parse_positive_integer(" "), None);
    assert_eq!(parse_positive_integer(" 12"), None);
    assert_eq!(parse_positive_integer("12 "), None);
}

#[test]
fn test_rejects_signs_and_separators() {
    for text in ["-5", "+5", "1.000", "1,000", "1e3", "12abc", "abc", "½", "٣"] {
        assert_eq!(parse_positive_integer(text), None, "accepted {:?}", text);
    }
}

#[test]
fn test_rejects_overflow() {
    assert_eq!(parse_positive_integer("18446744073709551615"), Some(u64::MAX));
    assert_eq!(parse_positive_integer("18446744073709551616"), None);
}

#[test]
fn test_file_variant_matches_strict_rule() {
    for text in ["", "0", "abc", "-1", "10", " 10"] {
        assert_eq!(parse_file_integer(text), parse_positive_integer(text));
    }
}

// =============================================================================
// Interactive Tests
// =============================================================================

#[test]
fn test_prompt_reprompts_until_valid() {
    let mut input = Cursor::new("\nabc\n-5\n0\n  42  \n");
    let mut output = Vec::new();

    let value = prompt_positive_integer(&mut input, &mut output, "Population: ").unwrap();

    assert_eq!(value, 42);
    let transcript = String::from_utf8(output).unwrap();
    assert_eq!(transcript.matches("Population: ").count(), 5);
    assert_eq!(transcript.matches("cannot be empty").count(), 1);
    assert_eq!(transcript.matches("positive integer is required").count(), 3);
}

#[test]
fn test_prompt_has_no_upper_bound() {
    let mut input = Cursor::new("9999999999999\n");
    let mut output = Vec::new();

    let value = prompt_positive_integer(&mut input, &mut output, "> ").unwrap();

    assert_eq!(value, 9_999_999_999_999);
}

#[test]
fn test_prompt_reports_end_of_input() {
    let mut input = Cursor::new("abc\n");
    let mut output = Vec::new();

    let result = prompt_positive_integer(&mut input, &mut output, "> ");

    match result {
        Err(StoreError::Io(e)) => assert_eq!(e.kind(), ErrorKind::UnexpectedEof),
        other => panic!("expected end of input, got {:?}", other),
    }
}

#[test]
fn test_prompt_line_trims() {
    let mut input = Cursor::new("   Chile \r\n");
    let mut output = Vec::new();

    assert_eq!(prompt_line(&mut input, &mut output, "Name: ").unwrap(), "Chile");
    assert_eq!(String::from_utf8(output).unwrap(), "Name: ");
}

// =============================================================================
// Normalization Tests
// =============================================================================

#[test]
fn test_normalize_trims_and_title_cases() {
    assert_eq!(normalize_text("  south AMERICA "), "South America");
    assert_eq!(normalize_text("chile"), "Chile");
    assert_eq!(normalize_text("EUROPE"), "Europe");
}

#[test]
fn test_normalize_capitalizes_after_non_letters() {
    assert_eq!(normalize_text("guinea-bissau"), "Guinea-Bissau");
    assert_eq!(normalize_text("côte d'ivoire"), "Côte D'Ivoire");
}

#[test]
fn test_normalize_blank_is_empty() {
    assert_eq!(normalize_text("   "), "");
    assert_eq!(normalize_text(""), "");
}

#[test]
fn test_normalize_multi_char_uppercase() {
    assert_eq!(normalize_text("ßa land"), "Ssa Land");
    assert_eq!(normalize_text("ﬁji"), "Fiji");
}

#[test]
fn test_normalize_is_stable_on_its_own_output() {
    for text in ["ßa land", "ﬁji islands", "côte d'ivoire", "  south AMERICA ", "o'neil"] {
        let once = normalize_text(text);
        assert_eq!(normalize_text(&once), once, "unstable for {:?}", text);
    }
}

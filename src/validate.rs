//! Validator
//!
//! Checks applied to user input and to rows read from the data file.
//!
//! ## Responsibilities
//! - Positive-integer parsing (digits only, strictly greater than zero)
//! - Interactive re-prompting until a valid value is supplied
//! - Text normalization (trim + title case) for names and continents

use std::io::{BufRead, ErrorKind, Write};

use crate::error::{Result, StoreError};

/// Parse `text` as a strictly positive integer.
///
/// Only non-empty strings made of ASCII digits are accepted: no sign, no
/// surrounding whitespace, no grouping separators. Zero and values that do
/// not fit in a `u64` are rejected.
pub fn parse_positive_integer(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match text.parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(value) => Some(value),
    }
}

/// Non-interactive variant used for file rows and update values.
///
/// Returns `None` for empty, non-numeric or non-positive text and lets the
/// caller decide what to do (skip the row, keep the previous value).
pub fn parse_file_integer(text: &str) -> Option<u64> {
    parse_positive_integer(text)
}

/// Write `label` to `output` and read one trimmed line from `input`.
///
/// End of input is reported as `UnexpectedEof` so interactive loops can stop.
pub fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(StoreError::Io(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            "input closed while waiting for an answer",
        )));
    }

    Ok(line.trim().to_string())
}

/// Interactive variant: keep asking until a positive integer is entered.
///
/// Empty answers and invalid answers get distinct messages. There is no
/// upper bound on the accepted value besides `u64::MAX`.
pub fn prompt_positive_integer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<u64> {
    loop {
        let answer = prompt_line(input, output, label)?;

        if answer.is_empty() {
            writeln!(output, " This field cannot be empty.")?;
            continue;
        }

        match parse_positive_integer(&answer) {
            Some(value) => return Ok(value),
            None => writeln!(output, " A positive integer is required.")?,
        }
    }
}

/// Trim and title-case a name or continent.
///
/// The first letter of every run of letters is upper-cased and the rest of
/// the run lower-cased: `"  south AMERICA "` becomes `"South America"`.
pub fn normalize_text(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for ch in text.trim().chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                normalized.extend(ch.to_lowercase());
            } else {
                // 'ß' upper-cases to "SS": only the first char stays upper
                let mut upper = ch.to_uppercase();
                normalized.extend(upper.next());
                normalized.extend(upper.flat_map(char::to_lowercase));
            }
            previous_is_letter = true;
        } else {
            normalized.push(ch);
            previous_is_letter = false;
        }
    }

    normalized
}

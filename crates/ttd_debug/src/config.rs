//! Parsing of debug configuration strings such as `"net=2, misc:1"`.
//!
//! Grammar: tokens are separated by whitespace and/or commas. A token is one of
//!
//! * `N` — set every category to level `N`,
//! * `all=N` — same as above,
//! * `name=N` or `name:N` — set a single category (case-insensitive),
//! * `file=PATH` — redirect debug output to `PATH` (no spaces or commas).
//!
//! Levels above 255 saturate. Bad tokens are collected as errors and the rest
//! of the string is still applied.

use std::path::PathBuf;

use thiserror::Error;

use crate::Category;

/// A non-fatal problem found while parsing a debug string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DebugStringError {
    /// The name matches no category.
    #[error("unknown debug category '{0}'")]
    UnknownCategory(String),
    /// The level is not a non-negative integer.
    #[error("invalid debug level '{value}' for '{name}'")]
    InvalidLevel {
        /// Category name, or `all`.
        name: String,
        /// The rejected level text.
        value: String,
    },
    /// A `name` without `=N`, or an empty `file=`.
    #[error("missing value for '{0}'")]
    MissingValue(String),
}

/// One level assignment taken from a debug string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAssignment {
    /// Every category gets this level.
    All(u8),
    /// A single category gets this level.
    One(Category, u8),
}

/// Result of parsing a debug string, before it is applied to a level table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDebugString {
    /// Level changes, in the order they appear.
    pub assignments: Vec<LevelAssignment>,
    /// Target of the last `file=PATH` token.
    pub redirect: Option<PathBuf>,
    /// Tokens that could not be used.
    pub errors: Vec<DebugStringError>,
}

/// Splits a debug string into level assignments, a possible output file and
/// the tokens that were rejected. Nothing is applied here; see
/// [`DebugFacility::configure`](crate::DebugFacility::configure).
pub fn parse_debug_string(input: &str) -> ParsedDebugString {
    let mut parsed = ParsedDebugString::default();

    let tokens = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty());

    for token in tokens {
        if token.starts_with(|c: char| c.is_ascii_digit()) {
            match parse_level(token) {
                Some(level) => parsed.assignments.push(LevelAssignment::All(level)),
                None => parsed.errors.push(DebugStringError::InvalidLevel {
                    name: "all".to_string(),
                    value: token.to_string(),
                }),
            }
            continue;
        }

        let Some((name, value)) = token.split_once(['=', ':']) else {
            parsed
                .errors
                .push(DebugStringError::MissingValue(token.to_string()));
            continue;
        };

        if name.eq_ignore_ascii_case("file") {
            if value.is_empty() {
                parsed
                    .errors
                    .push(DebugStringError::MissingValue(name.to_string()));
            } else {
                parsed.redirect = Some(PathBuf::from(value));
            }
            continue;
        }

        let target = if name.eq_ignore_ascii_case("all") {
            None
        } else {
            match Category::from_name(name) {
                Some(category) => Some(category),
                None => {
                    parsed
                        .errors
                        .push(DebugStringError::UnknownCategory(name.to_string()));
                    continue;
                }
            }
        };

        let Some(level) = parse_level(value) else {
            parsed.errors.push(DebugStringError::InvalidLevel {
                name: name.to_string(),
                value: value.to_string(),
            });
            continue;
        };

        parsed.assignments.push(match target {
            Some(category) => LevelAssignment::One(category, level),
            None => LevelAssignment::All(level),
        });
    }

    parsed
}

fn parse_level(value: &str) -> Option<u8> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // All digits, so the only possible failure is overflow.
    let level = value.parse::<u64>().unwrap_or(u64::MAX);
    Some(level.min(u64::from(u8::MAX)) as u8)
}

//! Sort criteria and the letter filter

use std::fmt;

use thiserror::Error;

/// A single-character filter on the first character of the botanical name.
///
/// Matching is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter(char);

/// Rejected letter input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("Letter filter is empty")]
    Empty,

    #[error("Letter filter must be a single character, got '{0}'")]
    TooLong(String),
}

impl Letter {
    /// Wrap a character
    pub fn new(letter: char) -> Self {
        Self(letter)
    }

    /// Parse caller input. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(LetterError::Empty),
            (Some(c), None) => Ok(Self(c)),
            (Some(_), Some(_)) => Err(LetterError::TooLong(trimmed.to_string())),
        }
    }

    /// Lower-case form
    pub fn lower(&self) -> String {
        self.0.to_lowercase().collect()
    }

    /// Upper-case form
    pub fn upper(&self) -> String {
        self.0.to_uppercase().collect()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a catalog query selects and orders rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortCriterion {
    /// All rows by botanical name
    #[default]
    ByName,
    /// All rows by common name
    ByCommonName,
    /// All rows by family, then botanical name
    ByFamily,
    /// Rows whose botanical name starts with the letter, by botanical name
    ByLetter(Letter),
}

impl SortCriterion {
    /// Short name used in logs and links
    pub fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::ByName => "name",
            SortCriterion::ByCommonName => "common",
            SortCriterion::ByFamily => "family",
            SortCriterion::ByLetter(_) => "letter",
        }
    }

    /// The letter filter, if any
    pub fn letter(&self) -> Option<Letter> {
        match self {
            SortCriterion::ByLetter(letter) => Some(*letter),
            _ => None,
        }
    }

    /// Build a criterion from a `show` value and an optional letter.
    ///
    /// A non-empty letter always wins over `show`. Unknown `show` values fall
    /// back to ordering by botanical name.
    pub fn from_show(show: Option<&str>, letter: Option<&str>) -> Result<Self, LetterError> {
        if let Some(raw) = letter.filter(|l| !l.trim().is_empty()) {
            return Letter::parse(raw).map(SortCriterion::ByLetter);
        }

        Ok(match show.map(str::trim) {
            Some("common") => SortCriterion::ByCommonName,
            Some("family") => SortCriterion::ByFamily,
            _ => SortCriterion::ByName,
        })
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortCriterion::ByLetter(letter) => write!(f, "letter:{}", letter),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

use std::{collections::BTreeMap, fmt};

use serde::Serialize;

use crate::models::{Platform, YearInput};

/// Earliest plausible release year for a motion picture.
pub const EARLIEST_YEAR: i16 = 1888;
/// How far past the current year an announced title may be dated.
pub const FUTURE_YEAR_ALLOWANCE: i16 = 5;

pub const TITLE_REQUIRED: &str = "title required";
pub const INVALID_YEAR: &str = "invalid year";
pub const PLATFORM_DETAIL_REQUIRED: &str = "platform detail required";
pub const COVER_REQUIRED: &str = "cover URL required";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Year,
    PlatformOther,
    Cover,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Year => "year",
            Field::PlatformOther => "platform_other",
            Field::Cover => "cover",
        }
    }
}

/// Every rule violation found on a candidate, keyed by field.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(f, m)| (*f, *m))
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.as_str())?;
        }
        Ok(())
    }
}

/// The effective values of a record about to be written.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<'a> {
    pub title: &'a str,
    pub year: Option<YearInput>,
    pub platform: Platform,
    pub platform_other: &'a str,
    pub cover: &'a str,
}

pub fn year_in_range(year: i64, current_year: i16) -> Option<i16> {
    let latest = i64::from(current_year) + i64::from(FUTURE_YEAR_ALLOWANCE);
    if (i64::from(EARLIEST_YEAR)..=latest).contains(&year) {
        i16::try_from(year).ok()
    } else {
        None
    }
}

/// Runs every rule and returns the coerced year when the candidate is valid.
pub fn check(candidate: &Candidate<'_>, current_year: i16) -> Result<i16, FieldErrors> {
    let mut errors = FieldErrors::default();

    if candidate.title.trim().is_empty() {
        errors.insert(Field::Title, TITLE_REQUIRED);
    }

    let year = candidate
        .year
        .and_then(YearInput::number)
        .and_then(|y| year_in_range(y, current_year));
    if year.is_none() {
        errors.insert(Field::Year, INVALID_YEAR);
    }

    if candidate.platform.is_other() && candidate.platform_other.trim().is_empty() {
        errors.insert(Field::PlatformOther, PLATFORM_DETAIL_REQUIRED);
    }

    if candidate.cover.trim().is_empty() {
        errors.insert(Field::Cover, COVER_REQUIRED);
    }

    match year {
        Some(year) if errors.is_empty() => Ok(year),
        _ => Err(errors),
    }
}

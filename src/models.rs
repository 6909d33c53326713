use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(String);

impl MediaId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MediaId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    ToWatch,
    Watched,
    Paused,
    Dropped,
}

impl Status {
    pub const ALL: [Status; 4] = [Status::ToWatch, Status::Watched, Status::Paused, Status::Dropped];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::ToWatch => "to_watch",
            Status::Watched => "watched",
            Status::Paused => "paused",
            Status::Dropped => "dropped",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::ToWatch => "To watch",
            Status::Watched => "Watched",
            Status::Paused => "Paused",
            Status::Dropped => "Dropped",
        }
    }
}

/// Where a title is being watched. `Unset` is stored as an empty string and
/// `Other` is the only variant that carries free-text detail on the record.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[default]
    #[serde(rename = "")]
    Unset,
    Netflix,
    Hbo,
    Prime,
    Disney,
    Apple,
    Paramount,
    Other,
    Physical,
    Cinema,
}

impl Platform {
    pub const SELECTABLE: [Platform; 9] = [
        Platform::Netflix,
        Platform::Hbo,
        Platform::Prime,
        Platform::Disney,
        Platform::Apple,
        Platform::Paramount,
        Platform::Other,
        Platform::Physical,
        Platform::Cinema,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Unset => "",
            Platform::Netflix => "netflix",
            Platform::Hbo => "hbo",
            Platform::Prime => "prime",
            Platform::Disney => "disney",
            Platform::Apple => "apple",
            Platform::Paramount => "paramount",
            Platform::Other => "other",
            Platform::Physical => "physical",
            Platform::Cinema => "cinema",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Unset => "",
            Platform::Netflix => "Netflix",
            Platform::Hbo => "HBO Max",
            Platform::Prime => "Prime Video",
            Platform::Disney => "Disney+",
            Platform::Apple => "Apple TV+",
            Platform::Paramount => "Paramount+",
            Platform::Other => "Other platform",
            Platform::Physical => "Physical",
            Platform::Cinema => "Cinema",
        }
    }

    pub fn is_other(self) -> bool {
        self == Platform::Other
    }
}

/// Keeps the detail text only when the platform is `Other`.
pub fn platform_detail(platform: Platform, detail: String) -> String {
    if platform.is_other() { detail } else { String::new() }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: MediaId,
    pub title: String,
    pub year: i16,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub platform_other: String,
    pub cover: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A validated record that has not been stored yet.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaDraft {
    pub title: String,
    pub year: i16,
    pub description: String,
    pub status: Status,
    pub platform: Platform,
    pub platform_other: String,
    pub cover: String,
}

impl MediaDraft {
    pub fn into_record(self, id: MediaId, now: Timestamp) -> MediaRecord {
        MediaRecord {
            id,
            title: self.title,
            year: self.year,
            description: self.description,
            status: self.status,
            platform: self.platform,
            platform_other: platform_detail(self.platform, self.platform_other),
            cover: self.cover,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A year as submitted by a form. Numbers and numeric strings are coerced to
/// an integer; anything else is kept as `Invalid` so validation can report it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum YearInput {
    Number(i64),
    Invalid,
}

impl YearInput {
    pub fn number(self) -> Option<i64> {
        match self {
            YearInput::Number(n) => Some(n),
            YearInput::Invalid => None,
        }
    }
}

impl From<i64> for YearInput {
    fn from(value: i64) -> Self {
        YearInput::Number(value)
    }
}

impl From<i32> for YearInput {
    fn from(value: i32) -> Self {
        YearInput::Number(value.into())
    }
}

impl From<i16> for YearInput {
    fn from(value: i16) -> Self {
        YearInput::Number(value.into())
    }
}

impl<'de> Deserialize<'de> for YearInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Text(String),
        }

        let year = match Raw::deserialize(deserializer)? {
            Raw::Int(n) => YearInput::Number(n),
            Raw::Float(f) if f.is_finite() && f.fract() == 0.0 => YearInput::Number(f as i64),
            Raw::Float(_) => YearInput::Invalid,
            Raw::Text(s) => s.trim().parse().map(YearInput::Number).unwrap_or(YearInput::Invalid),
        };
        Ok(year)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct CreateInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: Option<YearInput>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default)]
    pub platform_other: String,
    #[serde(default)]
    pub cover: String,
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PatchInput {
    pub title: Option<String>,
    pub year: Option<YearInput>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub platform: Option<Platform>,
    pub platform_other: Option<String>,
    pub cover: Option<String>,
}

impl PatchInput {
    pub fn status(status: Status) -> Self {
        Self { status: Some(status), ..Self::default() }
    }

    /// Returns the new status when the patch changes nothing else.
    pub fn status_only(&self) -> Option<Status> {
        let untouched = self.title.is_none()
            && self.year.is_none()
            && self.description.is_none()
            && self.platform.is_none()
            && self.platform_other.is_none()
            && self.cover.is_none();
        if untouched { self.status } else { None }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Choices a form needs, plus the slot the collection is stored under.
#[derive(Clone, Debug, Serialize)]
pub struct FormOptions {
    pub slot: String,
    pub statuses: Vec<ChoiceOption>,
    pub platforms: Vec<ChoiceOption>,
}

impl FormOptions {
    pub fn new(slot: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            statuses: Status::ALL
                .iter()
                .map(|s| ChoiceOption { value: s.as_str(), label: s.label() })
                .collect(),
            platforms: Platform::SELECTABLE
                .iter()
                .map(|p| ChoiceOption { value: p.as_str(), label: p.label() })
                .collect(),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fields of a time entry, in the order they are validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeEntryField {
    Day,
    Site,
    Task,
    Hours,
}

impl TimeEntryField {
    pub const ALL: [TimeEntryField; 4] = [
        TimeEntryField::Day,
        TimeEntryField::Site,
        TimeEntryField::Task,
        TimeEntryField::Hours,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeEntryField::Day => "day",
            TimeEntryField::Site => "site",
            TimeEntryField::Task => "task",
            TimeEntryField::Hours => "hours",
        }
    }
}

impl fmt::Display for TimeEntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown time entry field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for TimeEntryField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeEntryField::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

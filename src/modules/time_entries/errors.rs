use crate::modules::time_entries::core::fields::TimeEntryField;
use crate::modules::time_entries::use_cases::add_time_entry::decision::DecideError;
use crate::shared::core::selection::SelectionError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimecardError {
    #[error("please fill in all fields (missing {field})")]
    MissingField { field: TimeEntryField },

    #[error("unknown week: {label}")]
    UnknownOption { label: String },

    #[error("no time entry is being composed")]
    NotComposing,

    #[error("a time card needs at least one week option")]
    NoWeekOptions,
}

impl From<DecideError> for TimecardError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::MissingField(field) => TimecardError::MissingField { field },
        }
    }
}

impl From<SelectionError> for TimecardError {
    fn from(error: SelectionError) -> Self {
        match error {
            SelectionError::UnknownOption { label } => TimecardError::UnknownOption { label },
            SelectionError::NoOptions => TimecardError::NoWeekOptions,
        }
    }
}

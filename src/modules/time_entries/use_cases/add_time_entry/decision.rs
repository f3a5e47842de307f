use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::fields::TimeEntryField;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum DecideError {
    #[error("please fill in all fields (missing {0})")]
    MissingField(TimeEntryField),
}

#[derive(Debug)]
pub enum Decision {
    Accepted { events: Vec<TimeEntryEvent> },
    Rejected { reason: DecideError },
}

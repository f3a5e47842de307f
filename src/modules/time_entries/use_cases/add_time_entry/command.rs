use crate::modules::time_entries::core::fields::TimeEntryField;
use crate::shared::core::draft::DraftSnapshot;

/// A request to commit the current draft as a new time entry.
///
/// The identifier and timestamp are minted by the caller so that deciding
/// stays a pure function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTimeEntry {
    pub time_entry_id: String,
    pub draft: DraftSnapshot<TimeEntryField>,
    pub recorded_at: i64,
}

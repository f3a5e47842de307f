use crate::modules::time_entries::core::{
    events::{TimeEntryEvent, v1::time_entry_added::TimeEntryAddedV1},
    fields::TimeEntryField,
    time_entry::TimeEntry,
};
use crate::modules::time_entries::use_cases::add_time_entry::{
    command::AddTimeEntry,
    decision::{DecideError, Decision},
};
use crate::shared::core::draft::DraftSnapshot;
use crate::shared::core::primitives::parse_float_prefix;

fn required_text(
    draft: &DraftSnapshot<TimeEntryField>,
    field: TimeEntryField,
) -> Result<String, DecideError> {
    draft
        .get(&field)
        .map(|raw| raw.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(DecideError::MissingField(field))
}

/// Upper bound for a single entry; keeps the running total finite.
pub const MAX_HOURS_PER_ENTRY: f64 = 24.0;

// Lenient on purpose: "8abc" counts as 8 hours.
fn required_hours(draft: &DraftSnapshot<TimeEntryField>) -> Result<f64, DecideError> {
    let raw = required_text(draft, TimeEntryField::Hours)?;
    parse_float_prefix(&raw)
        .filter(|hours| (0.0..=MAX_HOURS_PER_ENTRY).contains(hours))
        // "-0" parses as negative zero
        .map(f64::abs)
        .ok_or(DecideError::MissingField(TimeEntryField::Hours))
}

/// Checks the draft field by field, in declaration order, and builds the
/// committed entry. The first missing or unusable field is reported.
pub fn validate(command: &AddTimeEntry) -> Result<TimeEntry, DecideError> {
    let day = required_text(&command.draft, TimeEntryField::Day)?;
    let site = required_text(&command.draft, TimeEntryField::Site)?;
    let task = required_text(&command.draft, TimeEntryField::Task)?;
    let hours = required_hours(&command.draft)?;

    Ok(TimeEntry {
        time_entry_id: command.time_entry_id.clone(),
        day,
        site,
        task,
        hours,
        recorded_at: command.recorded_at,
    })
}

pub fn decide_add_time_entry(command: &AddTimeEntry) -> Decision {
    match validate(command) {
        Ok(entry) => Decision::Accepted {
            events: vec![TimeEntryEvent::TimeEntryAddedV1(TimeEntryAddedV1 {
                time_entry_id: entry.time_entry_id,
                day: entry.day,
                site: entry.site,
                task: entry.task,
                hours: entry.hours,
                recorded_at: entry.recorded_at,
            })],
        },
        Err(reason) => Decision::Rejected { reason },
    }
}

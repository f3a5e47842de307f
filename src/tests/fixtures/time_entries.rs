// Shared test fixtures for the time card. Compiled only under cfg(test).

use crate::modules::time_entries::controller::TimecardController;
use crate::modules::time_entries::core::collection::TimeEntryCollection;
use crate::modules::time_entries::core::events::v1::time_entry_added::TimeEntryAddedV1;
use crate::modules::time_entries::core::fields::TimeEntryField;
use crate::modules::time_entries::core::time_entry::TimeEntry;
use crate::modules::time_entries::use_cases::add_time_entry::command::AddTimeEntry;
use crate::shared::core::draft::DraftBuffer;

pub const WEEK_OPTIONS: [&str; 4] = [
    "Current Week",
    "Last Week",
    "Week of Jan 6-12",
    "Week of Dec 30-Jan 5",
];

pub fn make_time_entry(id: &str, day: &str, site: &str, task: &str, hours: f64) -> TimeEntry {
    TimeEntry {
        time_entry_id: id.to_string(),
        day: day.to_string(),
        site: site.to_string(),
        task: task.to_string(),
        hours,
        recorded_at: 1_700_000_000_000,
    }
}

pub fn seeded_entries() -> Vec<TimeEntry> {
    vec![
        make_time_entry("te-1", "Monday", "Site A", "Welding", 8.0),
        make_time_entry("te-2", "Tuesday", "Site B", "Framing", 7.0),
    ]
}

pub fn seeded_collection() -> TimeEntryCollection {
    TimeEntryCollection::with_entries(seeded_entries())
}

pub fn seeded_controller() -> TimecardController {
    TimecardController::new(seeded_entries(), WEEK_OPTIONS).unwrap()
}

pub fn make_time_entry_added_v1_event() -> TimeEntryAddedV1 {
    TimeEntryAddedV1 {
        time_entry_id: "te-fixed-0001".into(),
        day: "Thursday".into(),
        site: "Site D".into(),
        task: "Electrical".into(),
        hours: 8.0,
        recorded_at: 1_700_000_000_000,
    }
}

/// Builds draft input for the add-entry flow, pre-filled with a valid entry.
pub struct DraftBuilder {
    inner: DraftBuffer<TimeEntryField>,
}

impl Default for DraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl DraftBuilder {
    pub fn new() -> Self {
        Self::empty()
            .day("Thursday")
            .site("Site D")
            .task("Electrical")
            .hours("8")
    }

    pub fn empty() -> Self {
        Self {
            inner: DraftBuffer::new(),
        }
    }

    pub fn day(mut self, v: impl Into<String>) -> Self {
        self.inner.set(TimeEntryField::Day, v);
        self
    }

    pub fn site(mut self, v: impl Into<String>) -> Self {
        self.inner.set(TimeEntryField::Site, v);
        self
    }

    pub fn task(mut self, v: impl Into<String>) -> Self {
        self.inner.set(TimeEntryField::Task, v);
        self
    }

    pub fn hours(mut self, v: impl Into<String>) -> Self {
        self.inner.set(TimeEntryField::Hours, v);
        self
    }

    pub fn without(self, field: TimeEntryField) -> Self {
        Self {
            inner: self
                .inner
                .snapshot()
                .into_iter()
                .filter(|(f, _)| *f != field)
                .collect(),
        }
    }

    pub fn build(self) -> DraftBuffer<TimeEntryField> {
        self.inner
    }

    pub fn into_command(self) -> AddTimeEntry {
        AddTimeEntry {
            time_entry_id: "te-fixed-0001".to_string(),
            draft: self.inner.snapshot(),
            recorded_at: 1_700_000_000_000,
        }
    }
}

#[cfg(test)]
mod draft_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_fills_every_field() {
        let built = DraftBuilder::default().build();
        for field in TimeEntryField::ALL {
            assert!(built.get(&field).is_some(), "missing {field}");
        }
    }

    #[rstest]
    fn without_drops_only_the_given_field() {
        let built = DraftBuilder::new().without(TimeEntryField::Task).build();
        assert_eq!(built.get(&TimeEntryField::Task), None);
        assert_eq!(built.get(&TimeEntryField::Day), Some("Thursday"));
    }
}

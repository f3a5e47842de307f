use crate::modules::time_entries::core::time_entry::TimeEntry;

/// Committed time entries in insertion order, oldest first.
///
/// Append-only: entries are never edited or removed. Duplicate business fields
/// are allowed; only `time_entry_id` is unique.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeEntryCollection {
    entries: Vec<TimeEntry>,
}

impl TimeEntryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<TimeEntry>) -> Self {
        Self { entries }
    }

    pub fn append(&mut self, entry: TimeEntry) {
        self.entries.push(entry);
    }

    pub fn all(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sums the selected numeric field over every entry. Zero when empty.
    pub fn aggregate<F>(&self, selector: F) -> f64
    where
        F: Fn(&TimeEntry) -> f64,
    {
        self.entries.iter().map(selector).sum()
    }

    pub fn total_hours(&self) -> f64 {
        self.aggregate(|entry| entry.hours)
    }
}

#[cfg(test)]
mod time_entry_collection_tests {
    use super::*;
    use crate::tests::fixtures::time_entries::{make_time_entry, seeded_collection};
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> TimeEntryCollection {
        seeded_collection()
    }

    #[rstest]
    fn it_should_aggregate_to_zero_when_empty() {
        let collection = TimeEntryCollection::new();
        assert!(collection.is_empty());
        assert_eq!(collection.total_hours(), 0.0);
    }

    #[rstest]
    fn it_should_sum_the_hours_of_every_entry(before_each: TimeEntryCollection) {
        assert_eq!(before_each.total_hours(), 15.0);
    }

    #[rstest]
    fn it_should_append_at_the_end(mut before_each: TimeEntryCollection) {
        before_each.append(make_time_entry("te-3", "Thursday", "Site D", "Electrical", 8.0));
        assert_eq!(before_each.len(), 3);
        assert_eq!(before_each.all()[2].day, "Thursday");
        assert_eq!(before_each.all()[0].day, "Monday");
        assert_eq!(before_each.total_hours(), 23.0);
    }

    #[rstest]
    fn it_should_keep_duplicate_business_fields(mut before_each: TimeEntryCollection) {
        before_each.append(make_time_entry("te-3", "Monday", "Site A", "Welding", 8.0));
        assert_eq!(before_each.len(), 3);
    }

    #[rstest]
    fn it_should_aggregate_any_numeric_selector(before_each: TimeEntryCollection) {
        let overtime = before_each.aggregate(|entry| (entry.hours - 7.0).max(0.0));
        assert_eq!(overtime, 1.0);
    }
}

use crate::modules::time_entries::core::collection::TimeEntryCollection;
use crate::modules::time_entries::core::events::TimeEntryEvent;
use crate::modules::time_entries::core::time_entry::TimeEntry;

pub fn evolve(mut collection: TimeEntryCollection, event: TimeEntryEvent) -> TimeEntryCollection {
    match event {
        TimeEntryEvent::TimeEntryAddedV1(e) => {
            collection.append(TimeEntry {
                time_entry_id: e.time_entry_id,
                day: e.day,
                site: e.site,
                task: e.task,
                hours: e.hours,
                recorded_at: e.recorded_at,
            });
            collection
        }
    }
}

#[cfg(test)]
mod time_entry_evolve_tests {
    use super::*;
    use crate::modules::time_entries::core::events::v1::time_entry_added::TimeEntryAddedV1;
    use crate::tests::fixtures::time_entries::make_time_entry_added_v1_event;
    use rstest::{fixture, rstest};

    #[fixture]
    fn added_event() -> TimeEntryAddedV1 {
        make_time_entry_added_v1_event()
    }

    #[rstest]
    fn it_should_append_the_added_entry(added_event: TimeEntryAddedV1) {
        let collection = evolve(
            TimeEntryCollection::new(),
            TimeEntryEvent::TimeEntryAddedV1(added_event.clone()),
        );
        assert_eq!(collection.len(), 1);
        let entry = &collection.all()[0];
        assert_eq!(entry.time_entry_id, added_event.time_entry_id);
        assert_eq!(entry.day, added_event.day);
        assert_eq!(entry.site, added_event.site);
        assert_eq!(entry.task, added_event.task);
        assert_eq!(entry.hours, added_event.hours);
        assert_eq!(entry.recorded_at, added_event.recorded_at);
    }

    #[rstest]
    fn it_should_fold_events_in_order(added_event: TimeEntryAddedV1) {
        let second = TimeEntryAddedV1 {
            time_entry_id: "te-fixed-0002".into(),
            day: "Friday".into(),
            ..added_event.clone()
        };
        let collection = [added_event, second]
            .into_iter()
            .map(TimeEntryEvent::TimeEntryAddedV1)
            .fold(TimeEntryCollection::new(), evolve);
        let days: Vec<&str> = collection.all().iter().map(|e| e.day.as_str()).collect();
        assert_eq!(days, vec!["Thursday", "Friday"]);
    }
}

use std::collections::BTreeMap;

/// Raw, unvalidated field values for one record that is being composed.
pub type DraftSnapshot<F> = BTreeMap<F, String>;

/// In-progress input for a single record, keyed by field name.
///
/// Values are kept exactly as typed. Nothing is validated here; that is the
/// job of the decider that consumes a [`DraftSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftBuffer<F: Ord> {
    fields: BTreeMap<F, String>,
}

impl<F: Ord> Default for DraftBuffer<F> {
    fn default() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Clone> DraftBuffer<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites whatever was previously typed for `field`.
    pub fn set(&mut self, field: F, raw: impl Into<String>) {
        self.fields.insert(field, raw.into());
    }

    pub fn get(&self, field: &F) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn snapshot(&self) -> DraftSnapshot<F> {
        self.fields.clone()
    }
}

impl<F: Ord> FromIterator<(F, String)> for DraftBuffer<F> {
    fn from_iter<I: IntoIterator<Item = (F, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod draft_buffer_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> DraftBuffer<&'static str> {
        let mut draft = DraftBuffer::new();
        draft.set("day", "Thursday");
        draft.set("site", "Site D");
        draft
    }

    #[rstest]
    fn it_should_start_empty() {
        let draft = DraftBuffer::<&'static str>::new();
        assert!(draft.is_empty());
        assert!(draft.snapshot().is_empty());
    }

    #[rstest]
    fn it_should_overwrite_a_previous_value(mut before_each: DraftBuffer<&'static str>) {
        before_each.set("day", "Friday");
        assert_eq!(before_each.get(&"day"), Some("Friday"));
        assert_eq!(before_each.snapshot().len(), 2);
    }

    #[rstest]
    fn it_should_keep_raw_values_untouched(mut before_each: DraftBuffer<&'static str>) {
        before_each.set("hours", "  8abc ");
        assert_eq!(before_each.get(&"hours"), Some("  8abc "));
    }

    #[rstest]
    fn it_should_clear_every_field(mut before_each: DraftBuffer<&'static str>) {
        before_each.clear();
        assert!(before_each.is_empty());
        assert_eq!(before_each.get(&"day"), None);
    }

    #[rstest]
    fn it_should_return_a_detached_snapshot(mut before_each: DraftBuffer<&'static str>) {
        let snapshot = before_each.snapshot();
        before_each.set("day", "Saturday");
        assert_eq!(snapshot.get("day").map(String::as_str), Some("Thursday"));
    }
}

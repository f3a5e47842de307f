pub mod v1 {
    pub mod time_entry_added;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum TimeEntryEvent {
    TimeEntryAddedV1(v1::time_entry_added::TimeEntryAddedV1),
}

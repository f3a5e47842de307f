use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryAddedV1 {
    pub time_entry_id: String,
    pub day: String,
    pub site: String,
    pub task: String,
    pub hours: f64,
    pub recorded_at: i64,
}

use serde::{Deserialize, Serialize};

/// A committed time entry. Never edited after it enters the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub time_entry_id: String,
    pub day: String,
    pub site: String,
    pub task: String,
    pub hours: f64,
    pub recorded_at: i64,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    Upcoming,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: String,
    pub date: String,
    pub time: String,
    pub site: String,
    pub task: String,
    pub status: ShiftStatus,
}

/// One week of scheduled shifts, read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    week_label: String,
    shifts: Vec<Shift>,
}

impl Schedule {
    pub fn new(week_label: impl Into<String>, shifts: Vec<Shift>) -> Self {
        Self {
            week_label: week_label.into(),
            shifts,
        }
    }

    pub fn week_label(&self) -> &str {
        &self.week_label
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.shifts
    }

    pub fn upcoming(&self) -> impl Iterator<Item = &Shift> {
        self.shifts
            .iter()
            .filter(|shift| shift.status == ShiftStatus::Upcoming)
    }
}

#[cfg(test)]
mod schedule_tests {
    use super::*;
    use rstest::rstest;

    fn shift(id: &str, status: ShiftStatus) -> Shift {
        Shift {
            id: id.into(),
            date: "Monday, Jan 13".into(),
            time: "7:00 AM - 3:00 PM".into(),
            site: "Site A".into(),
            task: "Foundation Work".into(),
            status,
        }
    }

    #[rstest]
    fn it_should_list_shifts_in_order() {
        let schedule = Schedule::new(
            "Jan 13 - Jan 19, 2025",
            vec![shift("1", ShiftStatus::Completed), shift("2", ShiftStatus::Upcoming)],
        );
        assert_eq!(schedule.week_label(), "Jan 13 - Jan 19, 2025");
        let ids: Vec<&str> = schedule.shifts().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(schedule.upcoming().count(), 1);
    }
}

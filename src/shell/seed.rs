// Mock data the app starts with. Nothing here is persisted.

use crate::modules::profile::stats::{ProfileStat, ProfileStats};
use crate::modules::profile::user_profile::UserProfile;
use crate::modules::projects::project::{
    Project, ProjectBoard, ProjectDetails, ProjectError, ProjectStatus,
};
use crate::modules::schedule::shift::{Schedule, Shift, ShiftStatus};
use crate::modules::time_entries::core::time_entry::TimeEntry;

fn entry(id: &str, day: &str, site: &str, task: &str, hours: f64) -> TimeEntry {
    TimeEntry {
        time_entry_id: id.to_string(),
        day: day.to_string(),
        site: site.to_string(),
        task: task.to_string(),
        hours,
        recorded_at: 0,
    }
}

pub fn time_entries() -> Vec<TimeEntry> {
    vec![
        entry("1", "Monday", "Site A", "Welding", 8.0),
        entry("2", "Tuesday", "Site B", "Framing", 7.0),
        entry("3", "Wednesday", "Site C", "Drywall", 8.0),
    ]
}

pub fn profile() -> UserProfile {
    UserProfile {
        name: "John Smith".to_string(),
        email: "john.smith@construction.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        position: "Senior Construction Worker".to_string(),
        location: "New York, NY".to_string(),
        join_date: "January 2022".to_string(),
        avatar_url: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
    }
}

pub fn profile_stats() -> ProfileStats {
    ProfileStats::new(vec![
        ProfileStat::new("Total Hours", "1,247"),
        ProfileStat::new("Projects", "23"),
        ProfileStat::new("Experience", "3 Years"),
    ])
}

fn shift(id: &str, date: &str, time: &str, site: &str, task: &str) -> Shift {
    Shift {
        id: id.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        site: site.to_string(),
        task: task.to_string(),
        status: ShiftStatus::Upcoming,
    }
}

pub fn schedule() -> Schedule {
    Schedule::new(
        "Jan 13 - Jan 19, 2025",
        vec![
            shift("1", "Monday, Jan 13", "7:00 AM - 3:00 PM", "Site A", "Foundation Work"),
            shift("2", "Tuesday, Jan 14", "8:00 AM - 4:00 PM", "Site B", "Framing"),
            shift("3", "Wednesday, Jan 15", "7:30 AM - 3:30 PM", "Site C", "Electrical"),
        ],
    )
}

pub fn projects() -> Result<ProjectBoard, ProjectError> {
    let active = ProjectStatus::Active;
    Ok(ProjectBoard::new(vec![
        Project::new(
            ProjectDetails {
                id: "1",
                name: "Downtown Office Complex",
                client: "ABC Corp",
                due_date: "Mar 15, 2025",
                team_size: 8,
                location: "Downtown",
                status: active,
            },
            75,
        )?,
        Project::new(
            ProjectDetails {
                id: "2",
                name: "Residential Complex A",
                client: "XYZ Development",
                due_date: "Apr 20, 2025",
                team_size: 12,
                location: "North Side",
                status: active,
            },
            45,
        )?,
        Project::new(
            ProjectDetails {
                id: "3",
                name: "Shopping Center Renovation",
                client: "Retail Solutions",
                due_date: "Feb 28, 2025",
                team_size: 6,
                location: "West End",
                status: active,
            },
            90,
        )?,
    ]))
}

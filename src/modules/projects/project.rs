use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("progress must be between 0 and 100, got {0}")]
    ProgressOutOfRange(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    OnHold,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub client: String,
    pub progress: u8,
    pub due_date: String,
    pub team_size: u32,
    pub location: String,
    pub status: ProjectStatus,
}

/// Everything about a project except its progress, which is range checked.
#[derive(Debug, Clone)]
pub struct ProjectDetails<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub client: &'a str,
    pub due_date: &'a str,
    pub team_size: u32,
    pub location: &'a str,
    pub status: ProjectStatus,
}

impl Project {
    pub fn new(details: ProjectDetails<'_>, progress: u8) -> Result<Self, ProjectError> {
        if progress > 100 {
            return Err(ProjectError::ProgressOutOfRange(progress));
        }
        Ok(Self {
            id: details.id.to_string(),
            name: details.name.to_string(),
            client: details.client.to_string(),
            progress,
            due_date: details.due_date.to_string(),
            team_size: details.team_size,
            location: details.location.to_string(),
            status: details.status,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectBoard {
    projects: Vec<Project>,
}

impl ProjectBoard {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn active(&self) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(|project| project.status == ProjectStatus::Active)
    }

    /// Mean progress in percent; zero for an empty board.
    pub fn average_progress(&self) -> f64 {
        if self.projects.is_empty() {
            return 0.0;
        }
        let total: u32 = self.projects.iter().map(|p| u32::from(p.progress)).sum();
        f64::from(total) / self.projects.len() as f64
    }
}

#[cfg(test)]
mod project_board_tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn details(id: &str, status: ProjectStatus) -> ProjectDetails<'_> {
        ProjectDetails {
            id,
            name: "Downtown Office Complex",
            client: "ABC Corp",
            due_date: "Mar 15, 2025",
            team_size: 8,
            location: "Downtown",
            status,
        }
    }

    #[fixture]
    fn before_each() -> ProjectBoard {
        ProjectBoard::new(vec![
            Project::new(details("1", ProjectStatus::Active), 75).unwrap(),
            Project::new(details("2", ProjectStatus::Active), 45).unwrap(),
            Project::new(details("3", ProjectStatus::Completed), 90).unwrap(),
        ])
    }

    #[rstest]
    fn it_should_average_the_progress(before_each: ProjectBoard) {
        assert_eq!(before_each.average_progress(), 70.0);
    }

    #[rstest]
    fn it_should_filter_active_projects(before_each: ProjectBoard) {
        assert_eq!(before_each.active().count(), 2);
        assert_eq!(before_each.list().len(), 3);
    }

    #[rstest]
    fn it_should_report_zero_progress_for_an_empty_board() {
        assert_eq!(ProjectBoard::default().average_progress(), 0.0);
    }

    #[rstest]
    fn it_should_reject_progress_above_one_hundred() {
        let result = Project::new(details("4", ProjectStatus::Active), 101);
        assert_eq!(result, Err(ProjectError::ProgressOutOfRange(101)));
    }
}

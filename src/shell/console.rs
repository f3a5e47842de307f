use crate::modules::profile::controller::{ProfileController, ProfileError};
use crate::modules::profile::fields::{ProfileField, UnknownProfileField};
use crate::modules::profile::stats::ProfileStats;
use crate::modules::projects::project::ProjectBoard;
use crate::modules::schedule::shift::Schedule;
use crate::modules::session::login::{LoginError, LoginForm, Session, SessionController};
use crate::modules::settings::controller::{Activation, SettingsController, SettingsError};
use crate::modules::time_entries::controller::TimecardController;
use crate::modules::time_entries::core::fields::{TimeEntryField, UnknownField};
use crate::modules::time_entries::errors::TimecardError;
use crate::shared::core::notice::Notice;
use crate::shell::config::AppConfig;
use crate::shell::seed;
use anyhow::Context;
use serde_json::{Value as Json, json};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  entries | total | add | set <field> <value> | submit | cancel
  weeks | pick-week | close-week | select <week>
  profile | stats | edit-profile | profile-set <field> <value> | save-profile | cancel-profile
  settings | toggle <id> on|off | activate <id> | confirm <id>
  schedule | projects | login <user> <password>
  logout | confirm-logout | cancel-logout | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Json(Json),
    Quit,
}

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    #[error(transparent)]
    Timecard(#[from] TimecardError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Login(#[from] LoginError),

    #[error(transparent)]
    Field(#[from] UnknownField),

    #[error(transparent)]
    ProfileField(#[from] UnknownProfileField),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Line-oriented presentation layer over the screen controllers.
pub struct Console {
    timecard: TimecardController,
    profile: ProfileController,
    stats: ProfileStats,
    settings: SettingsController,
    schedule: Schedule,
    projects: ProjectBoard,
    session: SessionController,
}

fn split_first(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (text, ""),
    }
}

fn on_off(value: &str) -> Option<bool> {
    match value {
        "on" | "true" => Some(true),
        "off" | "false" => Some(false),
        _ => None,
    }
}

fn notice_reply(notice: &Notice) -> Reply {
    Reply::Text(format!("{}: {}", notice.title, notice.message))
}

impl Console {
    pub fn new(
        timecard: TimecardController,
        profile: ProfileController,
        stats: ProfileStats,
        settings: SettingsController,
        schedule: Schedule,
        projects: ProjectBoard,
    ) -> Self {
        Self {
            timecard,
            profile,
            stats,
            settings,
            schedule,
            projects,
            session: SessionController::default(),
        }
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let entries = if config.seed_mock_data {
            seed::time_entries()
        } else {
            Vec::new()
        };
        let timecard = TimecardController::new(entries, config.week_options.clone())
            .context("building the time card")?;
        let projects = if config.seed_mock_data {
            seed::projects().context("seeding projects")?
        } else {
            ProjectBoard::default()
        };
        let (schedule, stats) = if config.seed_mock_data {
            (seed::schedule(), seed::profile_stats())
        } else {
            (
                Schedule::new(timecard.current_week(), Vec::new()),
                ProfileStats::default(),
            )
        };
        Ok(Self::new(
            timecard,
            ProfileController::new(seed::profile()),
            stats,
            SettingsController::default(),
            schedule,
            projects,
        ))
    }

    pub fn timecard(&self) -> &TimecardController {
        &self.timecard
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.current()
    }

    pub fn execute(&mut self, line: &str) -> Result<Reply, ConsoleError> {
        let (command, rest) = split_first(line);
        match command {
            "" => Ok(Reply::Text(String::new())),
            "help" => Ok(Reply::Text(HELP.to_string())),
            "quit" | "exit" => Ok(Reply::Quit),

            "entries" => Ok(Reply::Json(serde_json::to_value(self.timecard.entries())?)),
            "total" => Ok(Reply::Text(format!("{} hrs", self.timecard.total_hours()))),
            "add" => {
                self.timecard.open_create();
                Ok(Reply::Text("composing a new time entry".to_string()))
            }
            "set" => {
                let (field, value) = split_first(rest);
                if field.is_empty() {
                    return Err(ConsoleError::Usage("set <day|site|task|hours> <value>"));
                }
                let field: TimeEntryField = field.parse()?;
                self.timecard.update_field(field, value)?;
                Ok(Reply::Text(format!("{field} = {value:?}")))
            }
            "submit" => {
                self.timecard.submit()?;
                Ok(Reply::Text(format!(
                    "time entry added, total {} hrs",
                    self.timecard.total_hours()
                )))
            }
            "cancel" => {
                self.timecard.cancel();
                Ok(Reply::Text("draft discarded".to_string()))
            }
            "weeks" => Ok(Reply::Json(json!({
                "current": self.timecard.current_week(),
                "options": self.timecard.week_options(),
            }))),
            "pick-week" => {
                self.timecard.open_week_picker();
                Ok(Reply::Text("select a week".to_string()))
            }
            "close-week" => {
                self.timecard.close_week_picker();
                Ok(Reply::Text(format!("week: {}", self.timecard.current_week())))
            }
            "select" => {
                if rest.is_empty() {
                    return Err(ConsoleError::Usage("select <week>"));
                }
                self.timecard.select_week(rest)?;
                Ok(Reply::Text(format!("week: {}", self.timecard.current_week())))
            }

            "profile" => Ok(Reply::Json(serde_json::to_value(self.profile.profile())?)),
            "stats" => Ok(Reply::Json(serde_json::to_value(self.stats.list())?)),
            "edit-profile" => {
                self.profile.open_edit();
                Ok(Reply::Text("editing profile".to_string()))
            }
            "profile-set" => {
                let (field, value) = split_first(rest);
                if field.is_empty() {
                    return Err(ConsoleError::Usage(
                        "profile-set <name|email|phone|position|location> <value>",
                    ));
                }
                let field: ProfileField = field.parse()?;
                self.profile.update_field(field, value)?;
                Ok(Reply::Text(format!("{field} = {value:?}")))
            }
            "save-profile" => {
                let notice = self.profile.save()?;
                Ok(notice_reply(&notice))
            }
            "cancel-profile" => {
                self.profile.cancel();
                Ok(Reply::Text("profile edit discarded".to_string()))
            }

            "settings" => Ok(Reply::Json(serde_json::to_value(self.settings.sections())?)),
            "toggle" => {
                let (id, value) = split_first(rest);
                let enabled = on_off(value).ok_or(ConsoleError::Usage("toggle <id> on|off"))?;
                self.settings.toggle(id, enabled)?;
                Ok(Reply::Text(format!("{id}: {value}")))
            }
            "activate" => match self.settings.activate(rest)? {
                Activation::Notice(notice) => Ok(notice_reply(&notice)),
                Activation::ConfirmationRequired(notice) => Ok(Reply::Text(format!(
                    "{}: {} (run 'confirm {rest}')",
                    notice.title, notice.message
                ))),
                Activation::Nothing => Ok(Reply::Text(String::new())),
            },
            "confirm" => {
                let notice = self.settings.confirm(rest)?;
                Ok(notice_reply(&notice))
            }

            "schedule" => Ok(Reply::Json(json!({
                "week": self.schedule.week_label(),
                "shifts": self.schedule.shifts(),
            }))),
            "projects" => Ok(Reply::Json(json!({
                "average_progress": self.projects.average_progress(),
                "projects": self.projects.list(),
            }))),
            "login" => {
                let (username, password) = split_first(rest);
                let session = self.session.login(&LoginForm {
                    username: username.to_string(),
                    password: password.to_string(),
                })?;
                Ok(Reply::Text(format!("signed in as {}", session.username)))
            }
            "logout" => {
                let notice = self.session.request_logout()?;
                Ok(Reply::Text(format!(
                    "{}: {} (run 'confirm-logout')",
                    notice.title, notice.message
                )))
            }
            "confirm-logout" => {
                let session = self.session.confirm_logout()?;
                Ok(Reply::Text(format!("signed out {}", session.username)))
            }
            "cancel-logout" => {
                self.session.cancel_logout();
                Ok(Reply::Text("still signed in".to_string()))
            }

            other => Err(ConsoleError::UnknownCommand(other.to_string())),
        }
    }
}

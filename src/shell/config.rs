use thiserror::Error;

pub const DEFAULT_WEEKS: [&str; 4] = [
    "Current Week",
    "Last Week",
    "Week of Jan 6-12",
    "Week of Dec 30-Jan 5",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be true or false, got {value:?}")]
    InvalidBool { name: &'static str, value: String },

    #[error("{name} must name at least one week")]
    EmptyWeeks { name: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_filter: String,
    pub seed_mock_data: bool,
    pub week_options: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            seed_mock_data: true,
            week_options: DEFAULT_WEEKS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl AppConfig {
    /// Reads `TIMECARD_*` variables, after loading a `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_filter = lookup("TIMECARD_LOG")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let seed_mock_data = match lookup("TIMECARD_SEED") {
            Some(value) => parse_bool("TIMECARD_SEED", &value)?,
            None => defaults.seed_mock_data,
        };

        let week_options = match lookup("TIMECARD_WEEKS") {
            Some(value) => {
                let weeks: Vec<String> = value
                    .split('|')
                    .map(str::trim)
                    .filter(|week| !week.is_empty())
                    .map(str::to_string)
                    .collect();
                if weeks.is_empty() {
                    return Err(ConfigError::EmptyWeeks {
                        name: "TIMECARD_WEEKS",
                    });
                }
                weeks
            }
            None => defaults.week_options,
        };

        Ok(Self {
            log_filter,
            seed_mock_data,
            week_options,
        })
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

use anyhow::Context;
use std::io::{self, BufRead, Write};

use crew_timecard::shell::config::AppConfig;
use crew_timecard::shell::console::{Console, HELP, Reply};
use crew_timecard::shell::logging;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("reading configuration")?;
    logging::init(&config.log_filter)?;
    tracing::info!(
        seed = config.seed_mock_data,
        weeks = config.week_options.len(),
        "starting time card console"
    );

    let mut console = Console::from_config(&config)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{HELP}")?;

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match console.execute(&line) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Text(text)) if text.is_empty() => {}
            Ok(Reply::Text(text)) => writeln!(stdout, "{text}")?,
            Ok(Reply::Json(value)) => {
                writeln!(stdout, "{}", serde_json::to_string_pretty(&value)?)?
            }
            Err(error) => writeln!(stdout, "error: {error}")?,
        }
        stdout.flush()?;
    }
    Ok(())
}

use crate::cli::{actions::Action, commands, dispatch::handler, telemetry};
use anyhow::Result;
use tracing::Level;

fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Start the CLI: parse arguments, bring up logging, return the action.
///
/// # Errors
///
/// Returns an error if logging initialization or argument dispatch fails.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity_level = level_from_verbosity(matches.get_one::<u8>("verbosity").map_or(0, |&v| v));

    telemetry::init(Some(verbosity_level))?;

    let action = handler(&matches)?;

    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_from_verbosity(0), Level::ERROR);
        assert_eq!(level_from_verbosity(1), Level::WARN);
        assert_eq!(level_from_verbosity(2), Level::INFO);
        assert_eq!(level_from_verbosity(3), Level::DEBUG);
        assert_eq!(level_from_verbosity(4), Level::TRACE);
        assert_eq!(level_from_verbosity(42), Level::TRACE);
    }
}

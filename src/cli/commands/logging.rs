use clap::{builder::ValueParser, Arg, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Level names in `-v` count order, so a name's index is its count.
const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn parse_level(level: &str) -> Result<u8, String> {
    let level = level.trim().to_lowercase();
    let index = match level.parse::<usize>() {
        Ok(count) => Some(count).filter(|count| *count < LEVELS.len()),
        Err(_) => LEVELS.iter().position(|name| *name == level),
    };
    index
        .and_then(|index| u8::try_from(index).ok())
        .ok_or_else(|| format!("invalid log level: {level} (expected 0..=4 or one of {LEVELS:?})"))
}

/// `BOOKSTALL_LOG_LEVEL` takes a count in `0..=4` or a level name.
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(parse_level)
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log level: -v warn, -vv info, -vvv debug, -vvvv trace (default: error)")
            .env("BOOKSTALL_LOG_LEVEL")
            .global(true)
            .action(clap::ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_map_to_counts() {
        assert_eq!(parse_level("error"), Ok(0));
        assert_eq!(parse_level("TRACE"), Ok(4));
        assert_eq!(parse_level(" debug "), Ok(3));
    }

    #[test]
    fn counts_stop_at_trace() {
        assert_eq!(parse_level("0"), Ok(0));
        assert_eq!(parse_level("4"), Ok(4));
        assert!(parse_level("5").is_err());
        assert!(parse_level("-1").is_err());
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(parse_level("verbose").is_err());
        assert!(parse_level("").is_err());
    }
}

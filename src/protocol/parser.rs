//! Host command parser.
//!
//! Parses the line-oriented control commands the interactive host accepts
//! into structured `Command` variants that the main loop dispatches on.

use thiserror::Error;

/// A parsed host command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Begin or resume advancing turns.
    Start,

    /// Stop advancing turns without losing state.
    Pause,

    /// Return to the idle seeded state.
    Reset,

    /// Advance up to `count` turns.
    Step { count: u32 },

    /// Advance until the contest finishes (bounded by the host's turn cap).
    Run,

    /// Reseed the host randomness source.
    Seed { value: u64 },

    /// Print the grid, scores, phase, and lifecycle state.
    Show,

    /// Print the score totals.
    Scores,

    /// Print the rolling event log.
    Log,

    /// Print command usage.
    Help,

    /// Terminate the host.
    Quit,
}

/// Errors produced while parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: '{0}'")]
    Unknown(String),

    #[error("'{command}' takes no argument")]
    UnexpectedArgument { command: &'static str },

    #[error("'{command}' requires an argument")]
    MissingArgument { command: &'static str },

    #[error("invalid argument for '{command}': '{value}'")]
    InvalidArgument {
        command: &'static str,
        value: String,
    },
}

/// Parses a single line of input into a `Command`.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = tokens.first() else {
        return Err(CommandError::Empty);
    };

    match head {
        "start" => bare(Command::Start, "start", &tokens),
        "pause" => bare(Command::Pause, "pause", &tokens),
        "reset" => bare(Command::Reset, "reset", &tokens),
        "run" => bare(Command::Run, "run", &tokens),
        "show" => bare(Command::Show, "show", &tokens),
        "scores" => bare(Command::Scores, "scores", &tokens),
        "log" => bare(Command::Log, "log", &tokens),
        "help" => bare(Command::Help, "help", &tokens),
        "quit" => bare(Command::Quit, "quit", &tokens),
        "step" => parse_step(&tokens),
        "seed" => parse_seed(&tokens),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Accepts a command that takes no argument.
fn bare(cmd: Command, name: &'static str, tokens: &[&str]) -> Result<Command, CommandError> {
    if tokens.len() > 1 {
        return Err(CommandError::UnexpectedArgument { command: name });
    }
    Ok(cmd)
}

/// Parses `step [count]`; the count defaults to 1.
fn parse_step(tokens: &[&str]) -> Result<Command, CommandError> {
    match tokens {
        [_] => Ok(Command::Step { count: 1 }),
        [_, raw] => raw
            .parse::<u32>()
            .map(|count| Command::Step { count })
            .map_err(|_| CommandError::InvalidArgument {
                command: "step",
                value: (*raw).to_string(),
            }),
        _ => Err(CommandError::UnexpectedArgument { command: "step" }),
    }
}

/// Parses `seed <value>`.
fn parse_seed(tokens: &[&str]) -> Result<Command, CommandError> {
    match tokens {
        [_] => Err(CommandError::MissingArgument { command: "seed" }),
        [_, raw] => raw
            .parse::<u64>()
            .map(|value| Command::Seed { value })
            .map_err(|_| CommandError::InvalidArgument {
                command: "seed",
                value: (*raw).to_string(),
            }),
        _ => Err(CommandError::UnexpectedArgument { command: "seed" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(parse_command("start"), Ok(Command::Start));
        assert_eq!(parse_command("pause"), Ok(Command::Pause));
        assert_eq!(parse_command("reset"), Ok(Command::Reset));
        assert_eq!(parse_command("run"), Ok(Command::Run));
        assert_eq!(parse_command("show"), Ok(Command::Show));
        assert_eq!(parse_command("scores"), Ok(Command::Scores));
        assert_eq!(parse_command("log"), Ok(Command::Log));
        assert_eq!(parse_command("help"), Ok(Command::Help));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
    }

    #[test]
    fn step_defaults_to_one() {
        assert_eq!(parse_command("step"), Ok(Command::Step { count: 1 }));
        assert_eq!(parse_command("step 25"), Ok(Command::Step { count: 25 }));
    }

    #[test]
    fn seed_requires_numeric_value() {
        assert_eq!(parse_command("seed 42"), Ok(Command::Seed { value: 42 }));
        assert_eq!(
            parse_command("seed"),
            Err(CommandError::MissingArgument { command: "seed" })
        );
        assert_eq!(
            parse_command("seed abc"),
            Err(CommandError::InvalidArgument {
                command: "seed",
                value: "abc".to_string(),
            })
        );
    }

    #[test]
    fn rejects_trailing_arguments() {
        assert_eq!(
            parse_command("start now"),
            Err(CommandError::UnexpectedArgument { command: "start" })
        );
        assert_eq!(
            parse_command("step 1 2"),
            Err(CommandError::UnexpectedArgument { command: "step" })
        );
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert_eq!(
            parse_command("launch"),
            Err(CommandError::Unknown("launch".to_string()))
        );
        assert_eq!(parse_command(""), Err(CommandError::Empty));
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(parse_command("  step  3 "), Ok(Command::Step { count: 3 }));
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = parse_command("seed xyz").unwrap_err();
        assert_eq!(err.to_string(), "invalid argument for 'seed': 'xyz'");
    }
}

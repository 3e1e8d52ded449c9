//! Line commands accepted by a session.

use std::str::FromStr;

use thiserror::Error;

use crate::effects::{Animation, UnknownAnimation};
use crate::notice::NoticeKind;

/// Help text listing every command.
pub const HELP: &[&str] = &[
    "calc <a> <b>        run all four operations",
    "eval <a> <b> <op>   run one operation (add, subtract, multiply, divide)",
    "scope               scope demonstration",
    "toggle              start/stop the loading simulation",
    "modal <kind>        open a success, warning or info modal",
    "close | esc         dismiss the modal",
    "flip                flip the card",
    "animate <kind>      bounce, shake or glow the box",
    "reset               reset the box",
    "color               pick a random accent colour",
    "help                this text",
    "quit                leave the session",
];

/// A parsed session command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Calc { lhs: String, rhs: String },
    Eval { lhs: String, rhs: String, op: String },
    Scope,
    Toggle,
    Modal(NoticeKind),
    Close,
    Escape,
    Flip,
    Animate(Animation),
    Reset,
    Color,
    Help,
    Quit,
}

/// Errors from parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),

    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(&'static str),

    #[error(transparent)]
    Animation(#[from] UnknownAnimation),
}

impl FromStr for Command {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(SessionError::Empty)?;
        let args: Vec<&str> = words.collect();

        let bare = |command: &'static str, cmd: Command| {
            if args.is_empty() {
                Ok(cmd)
            } else {
                Err(SessionError::UnexpectedArgument(command))
            }
        };

        match name {
            "calc" => match args.as_slice() {
                [lhs, rhs] => Ok(Command::Calc {
                    lhs: lhs.to_string(),
                    rhs: rhs.to_string(),
                }),
                _ => Err(SessionError::MissingArgument {
                    command: "calc",
                    expected: "two operands",
                }),
            },
            "eval" => match args.as_slice() {
                [lhs, rhs, op] => Ok(Command::Eval {
                    lhs: lhs.to_string(),
                    rhs: rhs.to_string(),
                    op: op.to_string(),
                }),
                _ => Err(SessionError::MissingArgument {
                    command: "eval",
                    expected: "two operands and an operation",
                }),
            },
            "modal" => match args.as_slice() {
                [kind] => Ok(Command::Modal(NoticeKind::from_tag(kind))),
                _ => Err(SessionError::MissingArgument {
                    command: "modal",
                    expected: "a kind",
                }),
            },
            "animate" => match args.as_slice() {
                [kind] => Ok(Command::Animate(kind.parse()?)),
                _ => Err(SessionError::MissingArgument {
                    command: "animate",
                    expected: "an animation",
                }),
            },
            "scope" => bare("scope", Command::Scope),
            "toggle" => bare("toggle", Command::Toggle),
            "close" => bare("close", Command::Close),
            "esc" | "escape" => bare("esc", Command::Escape),
            "flip" => bare("flip", Command::Flip),
            "reset" => bare("reset", Command::Reset),
            "color" | "colour" => bare("color", Command::Color),
            "help" | "?" => bare("help", Command::Help),
            "quit" | "exit" => bare("quit", Command::Quit),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }
}

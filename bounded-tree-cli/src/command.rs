//! Script line parsing
//!
//! One command per line. Keys are signed integers, values are single words.

use thiserror::Error;

/// A parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <key> <value>`
    Add { key: i64, value: String },
    /// `find <key>`
    Find { key: i64 },
    /// `delete <key>`
    Delete { key: i64 },
    /// `min`
    Min,
    /// `max`
    Max,
    /// `size`
    Size,
    /// `full`
    Full,
    /// `print`
    Print,
    /// `inorder`
    InOrder,
    /// `leaves`
    Leaves,
    /// `subtree <low> <high>`
    SubTree { lower: i64, upper: i64 },
    /// `height`
    Height,
}

/// Why a line could not be turned into a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command `{0}`")]
    UnknownCommand(String),
    #[error("`{command}` takes {expected} argument(s), got {found}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("invalid key `{0}`")]
    InvalidKey(String),
}

/// Parses one script line.
///
/// Returns `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let arguments: Vec<&str> = words.collect();

    let command = match name {
        "add" => {
            let [key, value] = expect_arguments::<2>("add", &arguments)?;
            Command::Add {
                key: parse_key(key)?,
                value: value.to_string(),
            }
        }
        "find" => {
            let [key] = expect_arguments::<1>("find", &arguments)?;
            Command::Find {
                key: parse_key(key)?,
            }
        }
        "delete" => {
            let [key] = expect_arguments::<1>("delete", &arguments)?;
            Command::Delete {
                key: parse_key(key)?,
            }
        }
        "subtree" => {
            let [lower, upper] = expect_arguments::<2>("subtree", &arguments)?;
            Command::SubTree {
                lower: parse_key(lower)?,
                upper: parse_key(upper)?,
            }
        }
        "min" => nullary("min", &arguments, Command::Min)?,
        "max" => nullary("max", &arguments, Command::Max)?,
        "size" => nullary("size", &arguments, Command::Size)?,
        "full" => nullary("full", &arguments, Command::Full)?,
        "print" => nullary("print", &arguments, Command::Print)?,
        "inorder" => nullary("inorder", &arguments, Command::InOrder)?,
        "leaves" => nullary("leaves", &arguments, Command::Leaves)?,
        "height" => nullary("height", &arguments, Command::Height)?,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn expect_arguments<'a, const N: usize>(
    command: &'static str,
    arguments: &[&'a str],
) -> Result<[&'a str; N], ParseError> {
    <[&str; N]>::try_from(arguments).map_err(|_| ParseError::WrongArity {
        command,
        expected: N,
        found: arguments.len(),
    })
}

fn nullary(
    command: &'static str,
    arguments: &[&str],
    parsed: Command,
) -> Result<Command, ParseError> {
    expect_arguments::<0>(command, arguments).map(|[]| parsed)
}

fn parse_key(text: &str) -> Result<i64, ParseError> {
    text.parse()
        .map_err(|_| ParseError::InvalidKey(text.to_string()))
}

//! The command grammar.
//!
//! An invocation is classified once into a [`Command`], then executed by
//! the [`Interpreter`]. The first positional token selects the mode:
//!
//! | First token | Command                                  |
//! |-------------|------------------------------------------|
//! | (none)      | [`Command::List`], or replace from stdin |
//! | `--`        | [`Command::Reset`]                       |
//! | `++`        | [`Command::Locate`]                      |
//! | `+`         | [`Command::Add`]                         |
//! | `-`         | [`Command::Remove`]                      |
//! | other       | [`Command::Replace`], token included     |

pub mod interpreter;

pub use interpreter::{Interpreter, Outcome};

use std::fmt;

use crate::error::Result;

/// Token selecting [`Command::Reset`].
pub const RESET_TOKEN: &str = "--";
/// Token selecting [`Command::Locate`].
pub const LOCATE_TOKEN: &str = "++";
/// Token selecting [`Command::Add`].
pub const ADD_TOKEN: &str = "+";
/// Token selecting [`Command::Remove`].
pub const REMOVE_TOKEN: &str = "-";

/// One classified invocation, with its raw (not yet normalized) operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the current list.
    List,
    /// Empty the list.
    Reset,
    /// Print the backing file location.
    Locate,
    /// Append operands not already present.
    Add(Vec<String>),
    /// Delete operands that are present.
    Remove(Vec<String>),
    /// Replace the whole list with the operands, verbatim.
    Replace(Vec<String>),
}

impl Command {
    /// Classify an invocation.
    ///
    /// `args` are the positional arguments after the program name.
    /// `read_piped` returns the lines of standard input when it is piped or
    /// redirected, and `None` when it is an interactive terminal. It is
    /// called only when the operands can come from standard input: with no
    /// arguments at all, or with a bare `+` or `-`.
    ///
    /// Lines from standard input are operands, never command tokens.
    ///
    /// # Errors
    ///
    /// Returns whatever `read_piped` returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use xfiles::Command;
    ///
    /// let args = vec!["+".to_string(), "first".to_string()];
    /// let command = Command::classify(&args, || Ok(None)).unwrap();
    /// assert_eq!(command, Command::Add(vec!["first".to_string()]));
    ///
    /// let command = Command::classify(&[], || Ok(Some(vec!["sec ond".to_string()]))).unwrap();
    /// assert_eq!(command, Command::Replace(vec!["sec ond".to_string()]));
    /// ```
    pub fn classify<F>(args: &[String], read_piped: F) -> Result<Self>
    where
        F: FnOnce() -> Result<Option<Vec<String>>>,
    {
        let Some((first, rest)) = args.split_first() else {
            return Ok(match read_piped()? {
                Some(lines) => Self::Replace(lines),
                None => Self::List,
            });
        };

        let operands = |read_piped: F| -> Result<Vec<String>> {
            if rest.is_empty() {
                Ok(read_piped()?.unwrap_or_default())
            } else {
                Ok(rest.to_vec())
            }
        };

        Ok(match first.as_str() {
            RESET_TOKEN => Self::Reset,
            LOCATE_TOKEN => Self::Locate,
            ADD_TOKEN => Self::Add(operands(read_piped)?),
            REMOVE_TOKEN => Self::Remove(operands(read_piped)?),
            _ => Self::Replace(args.to_vec()),
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Reset => write!(f, "reset"),
            Self::Locate => write!(f, "locate"),
            Self::Add(ops) => write!(f, "add ({} operands)", ops.len()),
            Self::Remove(ops) => write!(f, "remove ({} operands)", ops.len()),
            Self::Replace(ops) => write!(f, "replace ({} operands)", ops.len()),
        }
    }
}

//! Gathering inputs from the host process.
//!
//! Everything the library treats as an external input (arguments, piped
//! standard input, the working directory, home directories, the store
//! location) is collected here.

use std::env;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use xfiles::path::SystemHomes;
use xfiles::{ConfigBuilder, Error, Interpreter, PathNormalizer, Store};

use crate::error::CliError;

/// Convert raw arguments to strings, rejecting non-UTF-8 operands.
pub fn operands_from_args<I>(args: I) -> Result<Vec<String>, CliError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|raw| {
                CliError::from(Error::InvalidPath {
                    path: PathBuf::from(raw),
                    reason: "operand contains invalid UTF-8".to_string(),
                })
            })
        })
        .collect()
}

/// Split piped input into operands, one per line. Lines are not split on
/// whitespace.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Read standard input if it is piped or redirected.
///
/// Returns `None` when standard input is an interactive terminal.
pub fn read_piped_stdin() -> xfiles::Result<Option<Vec<String>>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    log::debug!("read {} bytes from standard input", buffer.len());
    Ok(Some(split_lines(&buffer)))
}

/// Build the interpreter for this process: configured store, current
/// working directory, and the system account database.
pub fn build_interpreter() -> Result<Interpreter<SystemHomes>, CliError> {
    let store = Store::open(ConfigBuilder::new().build()?)?;
    let cwd = env::current_dir()?;
    let normalizer = PathNormalizer::from_cwd(&cwd, SystemHomes::new())?;
    Ok(Interpreter::new(store, normalizer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_keeps_spaces() {
        assert_eq!(split_lines("first\nsec ond\n"), ["first", "sec ond"]);
    }

    #[test]
    fn test_split_lines_handles_crlf_and_missing_newline() {
        assert_eq!(split_lines("a\r\nb"), ["a", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_operands_from_args() {
        let args = vec![OsString::from("+"), OsString::from("sec ond")];
        assert_eq!(operands_from_args(args).unwrap(), ["+", "sec ond"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_operands_from_args_rejects_invalid_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let args = vec![OsString::from_vec(vec![0x66, 0x6f, 0xff])];
        let err = operands_from_args(args).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}

use std::error::Error;
use std::fmt;

/// Failures at the CLI boundary: locating and reading input files, loading
/// the preferences file. The scanner itself never produces these; malformed
/// source text comes back as `Error`/`Unknown` tokens in the output stream.
#[derive(Debug)]
pub enum CliError {
    FileNotFound(String),
    Io(std::io::Error),
}

impl Error for CliError {}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => writeln!(f, "FileNotFoundError: {}", path),
            CliError::Io(err) => writeln!(f, "IOError: {}", err),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

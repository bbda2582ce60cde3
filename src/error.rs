use thiserror::Error;

/// Errors raised outside the proof search.
///
/// Failing to prove a goal is not an error; see `Substitution::is_failed`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("Parse error: {message}")]
    Parse {
        message: String,
        line: Option<usize>,
        col: Option<usize>,
    },
    #[error("Problem format error on line {line}: {message}")]
    Format { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;

// Helper conversions
impl From<::config::ConfigError> for Error {
    fn from(e: ::config::ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

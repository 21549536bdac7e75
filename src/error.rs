use thiserror::Error;

pub type Result<T> = std::result::Result<T, DevcountError>;

/// Shell failures are deliberately absent here: the log fetcher swallows
/// them into an empty log, so a `ShellOutError` can never reach callers of
/// the query surface.
#[derive(Error, Debug)]
pub enum DevcountError {
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid author identity: {0}")]
    InvalidIdentity(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

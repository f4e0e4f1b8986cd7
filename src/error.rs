use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong inside the shell loop.
///
/// Fatal variants end the whole process; the rest reject the current
/// line and hand control back to the prompt.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("cannot open or create alias file {path}: {source}")]
    ConfigUnavailable { path: PathBuf, source: io::Error },

    #[error("input line too long")]
    LineTooLong,

    #[error("too many arguments")]
    TooManyArguments,

    #[error("cd: {path}: {source}")]
    DirectoryChangeFailed { path: String, source: io::Error },

    #[error("{0} invalid command.")]
    CommandNotFound(String),

    #[error("failed to create child process: {0}")]
    ChildCreationFailed(io::Error),
}

impl ShellError {
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ConfigUnavailable { .. } | Self::ChildCreationFailed(_)
        )
    }
}

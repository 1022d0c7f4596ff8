use thiserror::Error;

use bm_core::CoreError;
use bm_output::OutputError;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("output error: {0}")]
    Output(#[from] OutputError),

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("{command} requires <{argument}>")]
    MissingArgument {
        command:  &'static str,
        argument: &'static str,
    },

    #[error("unknown setting {0:?}")]
    UnknownSetting(String),
}

pub type SessionResult<T> = Result<T, SessionError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] vv_config::ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] vv_session::SessionError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Extra line shown under the error, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Session(e) => Some(e.recovery_hint()),
            Self::Config(_) | Self::Logger { .. } | Self::Output(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

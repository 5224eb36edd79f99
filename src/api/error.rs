use thiserror::Error;

/// Failures from the remote API, split the way the UI reports them: transport
/// problems get a generic retry message, server-reported failures surface the
/// server's own text.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Server { message: String },
}

impl ApiError {
    pub fn server(message: impl Into<String>) -> Self {
        ApiError::Server {
            message: message.into(),
        }
    }

    /// The text shown to the user in a toast.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "Network error. Please try again.".to_string(),
            ApiError::Server { message } => message.clone(),
        }
    }
}

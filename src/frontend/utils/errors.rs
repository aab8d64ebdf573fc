use serde::{Deserialize, Serialize};
use std::{error::Error, fmt::Display};

pub type FrontendResult<T> = Result<T, FrontendError>;

/// Failure of a request to the article source. Serializable so that a result resolved during
/// server rendering can be handed to the hydrating client.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum FrontendError {
    /// Network unreachable, name resolution, refused connection or broken response body.
    Transport(String),
    /// Any non-2xx response.
    HttpStatus { status: u16, body: String },
    /// Response body is not a list of articles.
    Payload(String),
    /// The view that issued the request was gone before the response arrived.
    Cancelled,
}

impl FrontendError {
    /// Short text for the user. Unlike `Display` this leaves out response bodies, which
    /// may be whole error pages.
    pub fn notice(&self) -> String {
        match self {
            FrontendError::HttpStatus { status, .. } => {
                format!("server responded with status {status}")
            }
            e => e.to_string(),
        }
    }
}

impl Display for FrontendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrontendError::Transport(e) => write!(f, "request failed: {e}"),
            FrontendError::HttpStatus { status, body } if body.is_empty() => {
                write!(f, "server responded with status {status}")
            }
            FrontendError::HttpStatus { status, body } => {
                write!(f, "server responded with status {status}: {body}")
            }
            FrontendError::Payload(e) => write!(f, "unexpected response: {e}"),
            FrontendError::Cancelled => write!(f, "request cancelled"),
        }
    }
}

impl Error for FrontendError {}

#[cfg(feature = "ssr")]
impl From<reqwest::Error> for FrontendError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

#[cfg(not(feature = "ssr"))]
impl From<gloo_net::Error> for FrontendError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

impl From<serde_json::Error> for FrontendError {
    fn from(value: serde_json::Error) -> Self {
        Self::Payload(value.to_string())
    }
}

impl From<url::ParseError> for FrontendError {
    fn from(value: url::ParseError) -> Self {
        Self::Transport(value.to_string())
    }
}

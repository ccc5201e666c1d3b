use reqwest::StatusCode;
use std::result::Result as StdResult;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Volume search body is not JSON {0}")]
    Json(#[from] serde_json::Error),

    #[error("Volume search transport failed {0}")]
    Http(#[from] reqwest::Error),

    #[error("Volume search {uri} answered {status}")]
    Server { status: StatusCode, uri: String },
}

impl Error {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Server { status, .. } => Some(*status),
            Error::Http(error) => error.status(),
            Error::Json(_) => None,
        }
    }
}

pub type Result<A> = StdResult<A, Error>;

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Book lookup failed {0}")]
    Api(#[from] api_client::error::Error),

    #[error("IO error {0}")]
    IoError(#[from] io::Error),

    #[error("Could not install the log subscriber {0}")]
    Logging(String),

    #[error("Could not open `{0}` in a browser")]
    Browser(String),
}

pub type Result<A> = std::result::Result<A, Error>;

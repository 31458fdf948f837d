use thiserror::Error;

use crate::catalogue::GameKey;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Element '{element}' required by {game} is missing from the view")]
    MissingElement { game: GameKey, element: &'static str },

    #[error("Unknown game: {0}")]
    UnknownGame(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "http")]
impl From<ureq::Error> for Error {
    fn from(e: ureq::Error) -> Self {
        let message = match &e {
            ureq::Error::Timeout(_) => format!("Request timed out: {}", e),
            ureq::Error::ConnectionFailed | ureq::Error::HostNotFound => {
                format!("Connection failed: {}", e)
            }
            ureq::Error::StatusCode(status) => format!("HTTP {} error", status),
            _ => format!("HTTP error: {}", e),
        };
        Error::Http(message)
    }
}

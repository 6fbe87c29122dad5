use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Animator is frozen: {0} cannot be changed")]
    Frozen(&'static str),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Web binding error: {0}")]
    Web(String),
}

pub type Result<T> = std::result::Result<T, Error>;

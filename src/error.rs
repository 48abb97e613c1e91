use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid JSON input")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No {0} given. Pass it on the command line or set it in the JSON input")]
    MissingSetting(&'static str),

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_ARGUMENTS: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) | Error::MissingSetting(_) => exit_code::INVALID_ARGUMENTS,
            Error::Parse { .. } | Error::Json(_) | Error::InvalidInput(_) => exit_code::INVALID_INPUT,
            Error::Io(_) => exit_code::GENERAL_ERROR,
        }
    }
}

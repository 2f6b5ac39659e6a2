use thiserror::Error;

pub mod cache;
pub mod table;

pub use table::{Cell, PredictionTable};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<csv::Error> for InputError {
    fn from(value: csv::Error) -> Self {
        InputError::Parse(value.to_string())
    }
}

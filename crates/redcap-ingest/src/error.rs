//! Ingestion errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("dictionary is missing required column `{0}`")]
    MissingDictionaryColumn(&'static str),
    #[error("table has no column named `{0}`")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;

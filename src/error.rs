use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TSV write error: {0}")]
    Tsv(#[from] csv::Error),

    #[error("TSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("row {row} is a continuation with no preceding row to merge into")]
    OrphanContinuation { row: usize },
}

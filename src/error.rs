//! Error types for corpus conversion.
//!
//! Classification itself never fails: tokens that cannot be classified are
//! skipped and counted in [`crate::lexicon::ConversionStats`]. The errors
//! here come from the outer layers (reading corpora, rule files and
//! serialized lexicons).

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid rules file: {0}")]
    Rules(#[from] toml::de::Error),

    /// The input does not look like an OpenCorpora annotation document.
    #[error("malformed corpus: {0}")]
    MalformedCorpus(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Error::MalformedCorpus(msg.into())
    }
}

use thiserror::Error;

/// A per-record validation failure. The offending record is skipped and the
/// run continues.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RecordError {
    #[error("record {index}: missing or mistyped field `{path}` (found {found})")]
    MissingField {
        index: usize,
        path: String,
        found: &'static str,
    },

    #[error("record {index}: malformed timestamp {raw:?}")]
    MalformedTimestamp { index: usize, raw: String },
}

impl RecordError {
    pub fn missing(index: usize, path: &str, found: &'static str) -> Self {
        RecordError::MissingField {
            index,
            path: path.to_string(),
            found,
        }
    }

    /// 1-based position of the record in the input collection.
    pub fn index(&self) -> usize {
        match self {
            RecordError::MissingField { index, .. } | RecordError::MalformedTimestamp { index, .. } => {
                *index
            }
        }
    }
}

/// Failures that abort the whole run; no partial report is produced.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Input is not a list of records: {0}")]
    InputNotDecodable(#[from] serde_json::Error),

    #[error("Invalid source: {0}")]
    InvalidSource(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

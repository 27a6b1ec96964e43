pub mod assembler;
pub mod masking;
pub mod selector;


use crate::error::RecordError;

use std::fmt;

/// The outcome of one run: the rendered text plus one diagnostic per skipped
/// record, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub body: String,
    pub blocks: usize,
    pub diagnostics: Vec<RecordError>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.body)
    }
}

pub mod config;
pub mod error;
pub mod operation;
pub mod report;
pub mod source;
pub mod validator;

use crate::error::{RecordError, ReportError};
use crate::operation::Operation;
use crate::report::{assembler, selector, Report};
use crate::validator::RawOperation;

/// Decodes the raw input into untyped records. Anything other than a JSON
/// array of objects is fatal.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<RawOperation>, ReportError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Validates every record, then reports the `count` most recent executed
/// operations. Records that fail validation are skipped and come back as
/// diagnostics.
pub fn generate_report(records: Vec<RawOperation>, count: i64) -> Report {
    let total = records.len();
    let mut operations: Vec<Operation> = Vec::with_capacity(total);
    let mut diagnostics: Vec<RecordError> = Vec::new();

    for (position, record) in records.into_iter().enumerate() {
        match record.validate(position + 1) {
            Ok(op) => operations.push(op),
            Err(e) => diagnostics.push(e),
        }
    }

    tracing::debug!(
        total,
        valid = operations.len(),
        skipped = diagnostics.len(),
        "validated records"
    );

    let selected = selector::select_recent(operations, count);
    tracing::debug!(count, selected = selected.len(), "selected operations");

    Report {
        body: assembler::assemble(&selected),
        blocks: selected.len(),
        diagnostics,
    }
}

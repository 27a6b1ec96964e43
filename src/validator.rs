use crate::error::RecordError;
use crate::operation::{Amount, Currency, Operation, OperationAmount, OperationState};

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

/// A record as decoded from the input, before any shape checking. Every field
/// is optional here so a single broken record never fails the whole decode.
#[derive(Debug, Default, Deserialize)]
pub struct RawOperation {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub state: Option<Value>,
    #[serde(default)]
    pub date: Option<Value>,
    #[serde(default, rename = "operationAmount")]
    pub operation_amount: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub from: Option<Value>,
    #[serde(default)]
    pub to: Option<Value>,
}

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses the ISO-8601 shapes found in ledger exports. Offsets are dropped and
/// the wall-clock time is kept; a bare date means midnight.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

impl RawOperation {
    /// Checks the record against the operation model. `index` is the 1-based
    /// position in the input and ends up in any diagnostic.
    pub fn validate(self, index: usize) -> Result<Operation, RecordError> {
        let id = self
            .id
            .as_ref()
            .and_then(Value::as_i64)
            .ok_or_else(|| mismatch(index, "id", self.id.as_ref()))?;

        let state = required_str(self.state.as_ref(), index, "state")?;

        let raw_date = required_str(self.date.as_ref(), index, "date")?;
        let timestamp =
            parse_timestamp(raw_date).ok_or_else(|| RecordError::MalformedTimestamp {
                index,
                raw: raw_date.to_string(),
            })?;

        let amount = operation_amount(self.operation_amount.as_ref(), index)?;
        let description = required_str(self.description.as_ref(), index, "description")?;
        let source = required_str(self.from.as_ref(), index, "from")?;
        let destination = required_str(self.to.as_ref(), index, "to")?;

        Ok(Operation::new(
            id,
            OperationState::from(state),
            timestamp,
            amount,
            description,
            source,
            destination,
        ))
    }
}

/// Name of the JSON type actually present, for diagnostics.
pub fn json_kind(value: Option<&Value>) -> &'static str {
    match value {
        None | Some(Value::Null) => "nothing",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => "integer",
        Some(Value::Number(_)) => "number",
        Some(Value::String(s)) if s.is_empty() => "empty string",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}

fn mismatch(index: usize, path: &str, value: Option<&Value>) -> RecordError {
    RecordError::missing(index, path, json_kind(value))
}

fn required_str<'a>(
    value: Option<&'a Value>,
    index: usize,
    path: &str,
) -> Result<&'a str, RecordError> {
    value
        .and_then(Value::as_str)
        .ok_or_else(|| mismatch(index, path, value))
}

fn non_empty_str<'a>(
    value: Option<&'a Value>,
    index: usize,
    path: &str,
) -> Result<&'a str, RecordError> {
    match required_str(value, index, path)? {
        "" => Err(mismatch(index, path, value)),
        s => Ok(s),
    }
}

fn operation_amount(value: Option<&Value>, index: usize) -> Result<OperationAmount, RecordError> {
    let fields = value
        .and_then(Value::as_object)
        .ok_or_else(|| mismatch(index, "operationAmount", value))?;

    let amount = match fields.get("amount") {
        Some(Value::String(text)) => Amount::Text(text.clone()),
        Some(Value::Number(number)) => Amount::Number(number.clone()),
        other => return Err(mismatch(index, "operationAmount.amount", other)),
    };

    let currency = fields
        .get("currency")
        .and_then(Value::as_object)
        .ok_or_else(|| mismatch(index, "operationAmount.currency", fields.get("currency")))?;
    let name = non_empty_str(currency.get("name"), index, "operationAmount.currency.name")?;
    let code = non_empty_str(currency.get("code"), index, "operationAmount.currency.code")?;

    Ok(OperationAmount::new(amount, Currency::new(name, code)))
}

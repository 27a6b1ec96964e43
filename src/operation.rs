use chrono::NaiveDateTime;
use serde_json::Number;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    name: String,
    code: String,
}

impl Currency {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// The amount as it arrived on the wire. Strings are kept verbatim, numbers
/// keep the JSON number they were decoded as. Nothing is computed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Amount {
    Text(String),
    Number(Number),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Text(text) => f.write_str(text),
            Amount::Number(number) => write!(f, "{}", number),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationAmount {
    amount: Amount,
    currency: Currency,
}

impl OperationAmount {
    pub fn new(amount: Amount, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationState {
    Executed,
    Canceled,
    Pending,
    Other(String),
}

impl OperationState {
    pub fn is_executed(&self) -> bool {
        matches!(self, OperationState::Executed)
    }
}

impl From<&str> for OperationState {
    fn from(raw: &str) -> Self {
        match raw {
            "EXECUTED" => OperationState::Executed,
            "CANCELED" => OperationState::Canceled,
            "PENDING" => OperationState::Pending,
            other => OperationState::Other(other.to_string()),
        }
    }
}

impl fmt::Display for OperationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationState::Executed => f.write_str("EXECUTED"),
            OperationState::Canceled => f.write_str("CANCELED"),
            OperationState::Pending => f.write_str("PENDING"),
            OperationState::Other(raw) => f.write_str(raw),
        }
    }
}

/// A validated transaction record. Built once by the validator and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    id: i64,
    state: OperationState,
    timestamp: NaiveDateTime,
    amount: OperationAmount,
    description: String,
    source: String,
    destination: String,
}

impl Operation {
    pub fn new(
        id: i64,
        state: OperationState,
        timestamp: NaiveDateTime,
        amount: OperationAmount,
        description: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            id,
            state,
            timestamp,
            amount,
            description: description.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn state(&self) -> &OperationState {
        &self.state
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn amount(&self) -> &OperationAmount {
        &self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_vocabulary() {
        assert_eq!(OperationState::from("EXECUTED"), OperationState::Executed);
        assert_eq!(OperationState::from("CANCELED"), OperationState::Canceled);
        assert_eq!(OperationState::from("PENDING"), OperationState::Pending);
        assert_eq!(
            OperationState::from("executed"),
            OperationState::Other("executed".to_string())
        );
        assert!(OperationState::Executed.is_executed());
        assert!(!OperationState::Canceled.is_executed());
    }

    #[test]
    fn test_amount_keeps_original_text() {
        let amount = Amount::Text("31957.58".to_string());
        assert_eq!(amount.to_string(), "31957.58");
    }

    #[test]
    fn test_amount_from_number() {
        assert_eq!(Amount::Number(Number::from(500)).to_string(), "500");

        let number: Number = serde_json::from_str("8221.37").unwrap();
        assert_eq!(Amount::Number(number).to_string(), "8221.37");
    }
}

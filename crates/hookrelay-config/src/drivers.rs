use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("Invalid driver kind: {kind}")]
    InvalidDriverKind { kind: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChatDriver {
    #[default]
    Null,
    Http,
}

impl FromStr for ChatDriver {
    type Err = DriverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match &s.to_lowercase()[..] {
            "null" => Ok(Self::Null),
            "http" => Ok(Self::Http),
            _ => Err(DriverError::InvalidDriverKind { kind: s.into() }),
        }
    }
}

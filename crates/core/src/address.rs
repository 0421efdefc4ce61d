//! Account addresses.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error that may be encountered while decoding an address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The address string is empty
    #[error("Address must not be empty")]
    Empty,
    /// The address string contains whitespace
    #[error("Address must not contain whitespace: \"{0}\"")]
    ContainsWhitespace(String),
}

/// An account address. The inner identifier is opaque to this crate, it is
/// only checked for a sane string form.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Decode an address from its string form.
    pub fn decode(raw: impl AsRef<str>) -> Result<Self, DecodeError> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return Err(DecodeError::Empty);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(DecodeError::ContainsWhitespace(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    /// Encode the address into its string form.
    pub fn encode(&self) -> String {
        self.0.clone()
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl TryFrom<String> for Address {
    type Error = DecodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::decode(value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.encode()
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_address_decode_roundtrip() {
        let address = Address::decode("SP1ABC...XYZ789")
            .expect("Test failed");
        assert_eq!(address.encode(), "SP1ABC...XYZ789");
        assert_eq!(address.to_string(), "SP1ABC...XYZ789");
    }

    #[test]
    fn test_address_decode_empty() {
        assert_matches!(Address::decode(""), Err(DecodeError::Empty));
    }

    #[test]
    fn test_address_decode_whitespace() {
        assert_matches!(
            Address::decode("SP1ABC XYZ"),
            Err(DecodeError::ContainsWhitespace(_))
        );
        assert_matches!(
            "SP1\tABC".parse::<Address>(),
            Err(DecodeError::ContainsWhitespace(_))
        );
    }
}

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Card networks accepted by the API.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardNetwork {
    AmericanExpress,
    DinersClub,
    Discover,
    JCB,
    MasterCard,
    Visa,
    Unknown,
}

impl CardNetwork {
    pub const ALL: [CardNetwork; 7] = [
        CardNetwork::AmericanExpress,
        CardNetwork::DinersClub,
        CardNetwork::Discover,
        CardNetwork::JCB,
        CardNetwork::MasterCard,
        CardNetwork::Visa,
        CardNetwork::Unknown,
    ];

    /// Name used by the API in the card `type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardNetwork::AmericanExpress => "American Express",
            CardNetwork::DinersClub => "Diners Club",
            CardNetwork::Discover => "Discover",
            CardNetwork::JCB => "JCB",
            CardNetwork::MasterCard => "MasterCard",
            CardNetwork::Visa => "Visa",
            CardNetwork::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardNetwork {
    type Err = std::convert::Infallible;

    /// Unrecognized names map to `Unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CardNetwork::ALL
            .into_iter()
            .find(|network| network.as_str() == s)
            .unwrap_or(CardNetwork::Unknown))
    }
}

impl Serialize for CardNetwork {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CardNetwork {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(name
            .and_then(|n| n.parse().ok())
            .unwrap_or(CardNetwork::Unknown))
    }
}

/// Guesses the card network from the leading digits of a card number.
///
/// Classification is advisory: short, malformed or unrecognized input is
/// `Unknown`, never an error.
pub fn classify_network(number: &str) -> CardNetwork {
    let bytes = number.as_bytes();
    let prefix = |len: usize| bytes.get(..len);

    match bytes.first() {
        Some(b'4') => CardNetwork::Visa,
        Some(b'1') | Some(b'2') => match prefix(4) {
            Some(b"2131") | Some(b"1800") => CardNetwork::JCB,
            _ => CardNetwork::Unknown,
        },
        Some(b'6') => match prefix(4) {
            Some(b"6011") => CardNetwork::Discover,
            _ => CardNetwork::Unknown,
        },
        Some(b'5') => match prefix(2) {
            Some([b'5', b'1'..=b'5']) => CardNetwork::MasterCard,
            _ => CardNetwork::Unknown,
        },
        Some(b'3') => match prefix(2) {
            None => CardNetwork::Unknown,
            Some(b"34") | Some(b"37") => CardNetwork::AmericanExpress,
            Some(b"36") => CardNetwork::DinersClub,
            Some(b"30") => match prefix(3) {
                Some([b'3', b'0', b'0'..=b'5']) => CardNetwork::DinersClub,
                _ => CardNetwork::Unknown,
            },
            Some(_) => CardNetwork::JCB,
        },
        _ => CardNetwork::Unknown,
    }
}

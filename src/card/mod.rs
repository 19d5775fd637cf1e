//! Client-side card number checks.
//!
//! Both routines are pure and run before any card data is sent to the API.

pub mod luhn;
pub mod network;

pub use luhn::is_luhn_valid;
pub use network::{classify_network, CardNetwork};

use crate::utils::error::{Result, StripeError};

/// Runs both checks on a number that is about to be sent to the API.
///
/// Returns the classified network when the checksum passes.
pub fn check_card_number(number: &str) -> Result<CardNetwork> {
    let network = classify_network(number);
    if !is_luhn_valid(number)? {
        return Err(StripeError::InvalidCard {
            network: network.to_string(),
            reason: "checksum mismatch".to_string(),
        });
    }
    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_card_number() {
        assert_eq!(check_card_number("378282246310005").unwrap(), CardNetwork::AmericanExpress);
        assert!(matches!(
            check_card_number("4242424242424241"),
            Err(StripeError::InvalidCard { ref network, .. }) if network == "Visa"
        ));
        assert!(matches!(
            check_card_number("4242 4242"),
            Err(StripeError::NonNumericCardNumber { position: 4, character: ' ' })
        ));
        assert!(matches!(check_card_number(""), Err(StripeError::InvalidCard { .. })));
    }
}

use crate::utils::error::{Result, StripeError};

/// Checks a card number against the Luhn (Mod 10) checksum, which catches
/// most single-digit typos and adjacent transpositions.
///
/// The number must be digits only, without spaces or separators. Any other
/// character is reported as [`StripeError::NonNumericCardNumber`] before a
/// result is computed. An empty string is not a card number and yields
/// `Ok(false)`.
///
/// see <http://en.wikipedia.org/wiki/Luhn_algorithm>
pub fn is_luhn_valid(number: &str) -> Result<bool> {
    if let Some((position, character)) = number
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
    {
        return Err(StripeError::NonNumericCardNumber {
            position,
            character,
        });
    }
    if number.is_empty() {
        return Ok(false);
    }

    // every byte is an ASCII digit at this point
    let remainder = number
        .bytes()
        .rev()
        .enumerate()
        .fold(0, |acc, (i, b)| luhn_step(acc, i, u32::from(b - b'0')));

    Ok(remainder == 0)
}

/// Adds one digit's contribution to a running sum kept modulo 10, so the
/// accumulator stays below 10 for inputs of any length.
fn luhn_step(acc: u32, index_from_right: usize, digit: u32) -> u32 {
    let contribution = if index_from_right % 2 == 1 {
        // 14 -> 1 + 4 == 14 - 9
        let doubled = digit * 2;
        if doubled > 9 {
            doubled - 9
        } else {
            doubled
        }
    } else {
        digit
    };
    (acc + contribution) % 10
}

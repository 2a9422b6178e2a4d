//! Normalizing free-form phone numbers into ten digit integers.

use thiserror::Error;

/// Smallest ten digit number, anything below would have a leading zero.
pub const MIN_NUMBER: u64 = 1_000_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PhoneError {
    #[error("`{0}` contains no digits")]
    NoDigits(String),

    #[error("`{0}` has fewer than 10 digits")]
    TooShort(String),

    #[error("`{0}` has more than 11 digits")]
    TooLong(String),

    #[error("`{0}` has a leading zero in its last 10 digits")]
    LeadingZero(String),
}

pub type PhoneResult<T> = Result<T, PhoneError>;

/// Turns `"+1 (323) 456-7890"` into `3234567890`.
///
/// Non-digits are dropped. Ten or eleven digits are accepted, the last ten form the number and it
/// must not start with a zero.
pub fn sanitize(text: &str) -> PhoneResult<u64> {
    let digits: Vec<u64> = text
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .collect();

    match digits.len() {
        0 => return Err(PhoneError::NoDigits(text.to_owned())),
        1..=9 => return Err(PhoneError::TooShort(text.to_owned())),
        10 | 11 => {}
        _ => return Err(PhoneError::TooLong(text.to_owned())),
    }

    let number = digits[digits.len() - 10..]
        .iter()
        .fold(0, |acc, digit| acc * 10 + digit);

    if number < MIN_NUMBER {
        return Err(PhoneError::LeadingZero(text.to_owned()));
    }

    Ok(number)
}

/// Sanitizes every line of `text`, one phone number per line. Blank lines are ignored and lines
/// that are not phone numbers are skipped.
pub fn extract_all(text: &str) -> Vec<u64> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match sanitize(line) {
            Ok(number) => Some(number),
            Err(err) => {
                tracing::debug!(%err, "skipping line");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!(sanitize("1234567890"), Ok(1234567890));
        assert_eq!(sanitize("123-456-7890"), Ok(1234567890));
        assert_eq!(sanitize("(323) 456-7890"), Ok(3234567890));
        assert_eq!(sanitize("+1 223-456-7890"), Ok(2234567890));
        assert_eq!(sanitize("1-322-345-7890"), Ok(3223457890));
        assert_eq!(sanitize("322 555 0000"), Ok(3225550000));
    }

    #[test]
    fn rejects() {
        assert_eq!(sanitize("abc"), Err(PhoneError::NoDigits("abc".into())));
        assert_eq!(sanitize("555-0000"), Err(PhoneError::TooShort("555-0000".into())));
        assert_eq!(
            sanitize("001234567890"),
            Err(PhoneError::TooLong("001234567890".into()))
        );
        assert_eq!(
            sanitize("0123456789"),
            Err(PhoneError::LeadingZero("0123456789".into()))
        );
        assert_eq!(
            sanitize("1-023-456-7890"),
            Err(PhoneError::LeadingZero("1-023-456-7890".into()))
        );
    }

    #[test]
    fn extract_one_per_line() {
        let text = "1234567890\nnot-a-number\n  (323) 456-7890  \n555\n\n+1-223-456-7890\n322 555 0000\n";
        assert_eq!(
            extract_all(text),
            [1234567890, 3234567890, 2234567890, 3225550000]
        );
    }

    #[test]
    fn extract_rejects_two_numbers_on_one_line() {
        assert!(extract_all("1234567890 1234567891").is_empty());
    }
}

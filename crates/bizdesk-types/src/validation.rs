use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationErrors;

/// Exactly ten digits, used for mobile and business phone numbers.
pub static TEN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap_or_else(|e| panic!("bad phone regex: {e}")));

/// Field-level form errors keyed by wire field name, first message per field.
pub type FieldErrors = BTreeMap<String, String>;

/// Flattens `validator` output into one display message per field.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, list)| {
            list.first().map(|error| {
                let message = error
                    .message
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| format!("{field} is invalid"));
                (field.to_string(), message)
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0712345678", true)]
    #[case("071234567", false)]
    #[case("07123456789", false)]
    #[case("07123x5678", false)]
    #[case("", false)]
    fn test_ten_digits(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(TEN_DIGITS.is_match(input), expected);
    }
}

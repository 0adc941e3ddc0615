//! Small value helpers shared by the check modules.

/// Tokens that indicate an unhandled missing-value conversion upstream when
/// they appear as literal cell contents.
pub(crate) const NA_TOKENS: [&str; 4] = ["nan", "na", "none", "."];

pub(crate) fn is_na_token(value: &str) -> bool {
    let lowered = value.to_lowercase();
    NA_TOKENS.contains(&lowered.as_str())
}

/// Parse a statistic value in its textual form. Comma is the decimal
/// separator on the wire; period is accepted for the legacy pre-rounding
/// path.
pub(crate) fn parse_statistic(value: &str) -> Option<f64> {
    value.replace(',', ".").parse().ok()
}

/// Normalize a textual cell to comma-separated form.
pub(crate) fn comma_form(value: &str) -> String {
    value.replace('.', ",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn na_tokens_are_case_insensitive() {
        assert!(is_na_token("NaN"));
        assert!(is_na_token("NA"));
        assert!(is_na_token("None"));
        assert!(is_na_token("."));
        assert!(!is_na_token(""));
        assert!(!is_na_token("0"));
    }

    #[test]
    fn statistic_parsing_accepts_both_separators() {
        assert_eq!(parse_statistic("2,5"), Some(2.5));
        assert_eq!(parse_statistic("2.5"), Some(2.5));
        assert_eq!(parse_statistic("-3"), Some(-3.0));
        assert_eq!(parse_statistic("abc"), None);
        assert_eq!(parse_statistic(""), None);
    }
}

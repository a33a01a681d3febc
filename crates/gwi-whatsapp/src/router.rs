//! Intent detection for inbound messages

/// Extract the account id from an inbound message, if any.
///
/// Scans whitespace-separated tokens left to right and returns the first one
/// made up entirely of ASCII decimal digits. Non-ASCII digits do not match.
/// A message with no such token (including an empty message) has no account
/// id and is answered conversationally.
///
/// This is a heuristic: any all-digit word triggers a lookup, so a phone
/// number in the message body will be treated as an account id.
pub fn account_id(text: &str) -> Option<&str> {
    text.split_whitespace()
        .find(|token| token.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_token_detected() {
        assert_eq!(account_id("my account is 12345 please"), Some("12345"));
    }

    #[test]
    fn test_first_digit_token_wins() {
        assert_eq!(account_id("12345 or maybe 67890"), Some("12345"));
    }

    #[test]
    fn test_no_digit_token() {
        assert_eq!(account_id("when do your offices open?"), None);
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(account_id(""), None);
        assert_eq!(account_id("   "), None);
    }

    #[test]
    fn test_mixed_token_not_matched() {
        assert_eq!(account_id("acct12345"), None);
        assert_eq!(account_id("12345x"), None);
    }

    #[test]
    fn test_non_ascii_digits_not_matched() {
        // Arabic-Indic digits are digits to Unicode, but not account ids
        assert_eq!(account_id("١٢٣٤٥"), None);
    }

    #[test]
    fn test_surrounded_by_newlines_and_tabs() {
        assert_eq!(account_id("balance\n\t98765\nthanks"), Some("98765"));
    }
}

//! Free-text input cleanup
//!
//! Caller-supplied fields (repository URL, requirement text) pass through
//! [`clean_input`] before they reach any upstream service.

/// Clean a free-text input field.
///
/// Removes control characters (C0 and C1 ranges plus DEL) and collapses
/// every run of whitespace to a single space, with no leading or trailing
/// whitespace in the result.
pub fn clean_input(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !c.is_control()).collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_characters_removed() {
        assert_eq!(clean_input("a\x00b\x1fc\x7fd"), "abcd");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(clean_input("  implement   login\twith \n 2FA  "), "implement login with 2FA");
    }

    #[test]
    fn test_control_chars_do_not_become_spaces() {
        // Stripping happens before collapsing, so embedded control bytes
        // don't split words
        assert_eq!(clean_input("log\x08in"), "login");
    }

    #[test]
    fn test_clean_input_is_identity_on_clean_text() {
        assert_eq!(
            clean_input("https://github.com/owner/repo"),
            "https://github.com/owner/repo"
        );
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(clean_input(""), "");
        assert_eq!(clean_input(" \t\n "), "");
    }
}

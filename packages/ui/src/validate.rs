//! Client-side form validation.
//!
//! Each function maps a raw field value to the list of violated rules,
//! as human-readable messages. An empty list means the field is valid.
//! The functions are pure; pages recompute them on every render and also
//! use them to short-circuit a submit.

const PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_MAX_LEN: usize = 50;

/// Password strength rules for a new password.
pub fn validate_password_field(password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    let len = password.chars().count();

    if len < PASSWORD_MIN_LEN {
        errors.push(format!(
            "Password must be at least {PASSWORD_MIN_LEN} characters long."
        ));
    }
    if len > PASSWORD_MAX_LEN {
        errors.push(format!(
            "Password must be at most {PASSWORD_MAX_LEN} characters long."
        ));
    }
    if !password.chars().any(|c| c.is_alphabetic()) {
        errors.push("Password must contain at least one letter.".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit.".to_string());
    }

    errors
}

/// Confirmation-field rules: must be filled in and equal to the password.
pub fn validate_password_match_field(password: &str, confirmation: &str) -> Vec<String> {
    if confirmation.is_empty() {
        vec!["Please confirm the new password.".to_string()]
    } else if password != confirmation {
        vec!["Passwords do not match.".to_string()]
    } else {
        Vec::new()
    }
}

/// Email-field rules: required, and syntactically shaped like an address.
pub fn validate_email_field(email: &str) -> Vec<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return vec!["Email address is required.".to_string()];
    }
    if !is_valid_email(trimmed) {
        return vec!["Please enter a valid email address.".to_string()];
    }
    Vec::new()
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Domain needs at least one dot with non-empty labels around it.
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_whitespace_email_is_rejected() {
        assert!(!validate_email_field("").is_empty());
        assert!(!validate_email_field("   ").is_empty());
        assert!(!validate_email_field("\t\n").is_empty());
    }

    #[test]
    fn valid_emails_pass() {
        assert!(validate_email_field("ada@example.com").is_empty());
        assert!(validate_email_field("first.last@sub.example.org").is_empty());
        assert!(validate_email_field("  ada@example.com  ").is_empty());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        assert!(!validate_email_field("ada").is_empty());
        assert!(!validate_email_field("ada@").is_empty());
        assert!(!validate_email_field("@example.com").is_empty());
        assert!(!validate_email_field("ada@example").is_empty());
        assert!(!validate_email_field("ada@example..com").is_empty());
        assert!(!validate_email_field("ada smith@example.com").is_empty());
        assert!(!validate_email_field("ada@exa@mple.com").is_empty());
    }

    #[test]
    fn differing_passwords_do_not_match() {
        assert!(!validate_password_match_field("secret-123", "secret-124").is_empty());
    }

    #[test]
    fn equal_non_empty_passwords_match() {
        assert!(validate_password_match_field("secret-123", "secret-123").is_empty());
    }

    #[test]
    fn empty_confirmation_is_an_error() {
        assert!(!validate_password_match_field("secret-123", "").is_empty());
    }

    #[test]
    fn short_password_is_rejected() {
        assert!(!validate_password_field("ab1").is_empty());
    }

    #[test]
    fn overlong_password_is_rejected() {
        let password = format!("a1{}", "x".repeat(60));
        assert!(!validate_password_field(&password).is_empty());
    }

    #[test]
    fn password_needs_a_letter_and_a_digit() {
        assert!(!validate_password_field("12345678").is_empty());
        assert!(!validate_password_field("abcdefgh").is_empty());
    }

    #[test]
    fn conforming_password_passes() {
        assert!(validate_password_field("correct horse 9").is_empty());
    }

    #[test]
    fn rule_messages_accumulate_in_order() {
        let errors = validate_password_field("");
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("at least"));
    }
}

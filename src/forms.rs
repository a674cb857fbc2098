//! Pure form validation. Each validator returns a field-keyed error map;
//! submission only proceeds when the map comes back empty.

use std::collections::HashMap;

pub type FieldErrors = HashMap<&'static str, String>;

/// Accepts `local@domain.tld` with no whitespace in any part.
fn looks_like_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && !tld.is_empty()
        && !domain.chars().any(char::is_whitespace)
}

pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if name.trim().is_empty() {
        errors.insert("name", "Full name is required".into());
    }
    if email.is_empty() {
        errors.insert("email", "Email is required".into());
    } else if !looks_like_email(email) {
        errors.insert("email", "Please enter a valid email".into());
    }
    if password.is_empty() {
        errors.insert("password", "Password is required".into());
    } else if password.chars().count() < 6 {
        errors.insert("password", "Password must be at least 6 characters".into());
    }
    if password != confirm_password {
        errors.insert("confirm", "Passwords do not match".into());
    }
    errors
}

/// The login form only needs both fields present; the server judges the
/// rest.
pub fn validate_login(email: &str, password: &str) -> Option<String> {
    if email.is_empty() || password.is_empty() {
        Some("Please enter both email and password.".into())
    } else {
        None
    }
}

pub fn validate_transaction(title: &str, amount: &str, category: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if title.trim().is_empty() {
        errors.insert("title", "Title is required".into());
    }
    match amount.trim().parse::<f64>() {
        Ok(value) if value > 0.0 => {}
        _ => {
            errors.insert("amount", "Enter an amount greater than zero".into());
        }
    }
    if category.trim().is_empty() {
        errors.insert("category", "Category is required".into());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_signup_passes() {
        let errors = validate_signup("Ada Lovelace", "ada@example.com", "secret1", "secret1");
        assert!(errors.is_empty());
    }

    #[test]
    fn signup_flags_each_missing_field() {
        let errors = validate_signup("", "", "", "");
        assert_eq!(errors.get("name").unwrap(), "Full name is required");
        assert_eq!(errors.get("email").unwrap(), "Email is required");
        assert_eq!(errors.get("password").unwrap(), "Password is required");
        // empty confirm equals empty password, so no mismatch
        assert!(!errors.contains_key("confirm"));
    }

    #[test]
    fn signup_rejects_malformed_emails() {
        for bad in ["plain", "no@tld", "@example.com", "a b@example.com", "a@b@c.com"] {
            let errors = validate_signup("Ada", bad, "secret1", "secret1");
            assert_eq!(
                errors.get("email").unwrap(),
                "Please enter a valid email",
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn signup_rejects_short_password_and_mismatch() {
        let errors = validate_signup("Ada", "ada@example.com", "abc", "abcd");
        assert_eq!(
            errors.get("password").unwrap(),
            "Password must be at least 6 characters"
        );
        assert_eq!(errors.get("confirm").unwrap(), "Passwords do not match");
    }

    #[test]
    fn login_requires_both_fields() {
        assert!(validate_login("", "pw").is_some());
        assert!(validate_login("a@b.com", "").is_some());
        assert!(validate_login("a@b.com", "pw").is_none());
    }

    #[test]
    fn transaction_requires_positive_numeric_amount() {
        for bad in ["", "0", "-5", "abc", "1.2.3"] {
            let errors = validate_transaction("Rent", bad, "Housing");
            assert!(errors.contains_key("amount"), "expected {bad:?} to be rejected");
        }
        assert!(validate_transaction("Rent", "950.50", "Housing").is_empty());
    }

    #[test]
    fn transaction_trims_title_and_category() {
        let errors = validate_transaction("   ", "10", "  ");
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("category"));
        assert!(!errors.contains_key("amount"));
    }
}

use thiserror::Error;

use crate::email::disposable::is_disposable;

/// Why an address was rejected during registration prechecks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EmailError {
    #[error("Please enter a valid email address")]
    InvalidFormat,

    #[error("Disposable email addresses are not allowed")]
    DisposableEmail,
}

impl EmailError {
    /// Stable machine-readable code for the error envelope.
    pub fn code(self) -> &'static str {
        match self {
            EmailError::InvalidFormat => "INVALID_EMAIL",
            EmailError::DisposableEmail => "DISPOSABLE_EMAIL",
        }
    }
}

/// Minimal `local@domain.tld` shape check: no whitespace, exactly one `@`
/// region split, and a dot inside the domain part. This runs before
/// registration; it is deliberately not full RFC 5322 validation.
fn has_email_shape(input: &str) -> bool {
    if input.is_empty() || input.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validates an address for registration: shape first, then the disposable
/// domain check.
pub fn validate(email: &str) -> Result<(), EmailError> {
    let trimmed = email.trim();
    if !has_email_shape(trimmed) {
        return Err(EmailError::InvalidFormat);
    }
    if is_disposable(trimmed) {
        return Err(EmailError::DisposableEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_address_passes() {
        assert_eq!(validate("user@example.com"), Ok(()));
    }

    #[test]
    fn test_not_an_email_is_format_error() {
        assert_eq!(validate("not-an-email"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_disposable_domain_rejected() {
        assert_eq!(
            validate("user@mailinator.com"),
            Err(EmailError::DisposableEmail)
        );
    }

    #[test]
    fn test_missing_tld_rejected() {
        assert_eq!(validate("user@localhost"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_embedded_whitespace_rejected() {
        assert_eq!(validate("us er@example.com"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_double_at_rejected() {
        assert_eq!(validate("a@b@example.com"), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_empty_local_or_domain_rejected() {
        assert_eq!(validate("@example.com"), Err(EmailError::InvalidFormat));
        assert_eq!(validate("user@"), Err(EmailError::InvalidFormat));
        assert_eq!(validate("user@.com"), Err(EmailError::InvalidFormat));
        assert_eq!(validate("user@example."), Err(EmailError::InvalidFormat));
    }

    #[test]
    fn test_surrounding_whitespace_tolerated() {
        assert_eq!(validate("  user@example.com  "), Ok(()));
    }

    #[test]
    fn test_format_checked_before_disposable() {
        // no shape, so the disposable check never runs
        assert_eq!(validate("mailinator.com"), Err(EmailError::InvalidFormat));
    }
}

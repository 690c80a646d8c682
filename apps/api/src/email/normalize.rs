//! Email normalization for duplicate-account detection.
//!
//! Normalization folds away the alias tricks that make two addresses deliver
//! to the same mailbox: case, surrounding whitespace, `+` sub-addressing,
//! and Google's dot-insensitivity. Malformed input is not rejected here, only
//! lowercased and trimmed; rejection is `validate`'s job.

/// Domains where Google ignores dots in the local part.
const GOOGLE_MAIL_DOMAINS: &[&str] = &["gmail.com", "googlemail.com"];

/// Returns the canonical form of an address.
///
/// Splits on the first `@`; if either side is empty the lowercased, trimmed
/// input comes back unchanged. Everything from the first `+` in the local
/// part is stripped, and for Google mail domains all dots are removed from
/// the local part.
pub fn normalize(email: &str) -> String {
    let lowered = email.trim().to_lowercase();

    let Some((local, domain)) = lowered.split_once('@') else {
        return lowered;
    };
    if local.is_empty() || domain.is_empty() {
        return lowered;
    }

    let local = match local.split_once('+') {
        Some((base, _)) => base,
        None => local,
    };

    let local = if GOOGLE_MAIL_DOMAINS.contains(&domain) {
        local.replace('.', "")
    } else {
        local.to_string()
    };

    format!("{local}@{domain}")
}

/// The key used to detect "already registered" duplicates that differ only
/// by alias or dot formatting. Defined as the normalized form.
pub fn get_duplicate_check_key(email: &str) -> String {
    normalize(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(normalize("  User@Example.COM  "), "user@example.com");
    }

    #[test]
    fn test_strips_plus_suffix() {
        assert_eq!(normalize("user+newsletter@example.com"), "user@example.com");
    }

    #[test]
    fn test_gmail_dots_removed() {
        assert_eq!(normalize("a.b+tag@gmail.com"), "ab@gmail.com");
        assert_eq!(normalize("j.o.h.n@googlemail.com"), "john@googlemail.com");
    }

    #[test]
    fn test_dots_kept_outside_google() {
        assert_eq!(normalize("a.b@example.com"), "a.b@example.com");
    }

    #[test]
    fn test_malformed_passes_through_lowercased() {
        assert_eq!(normalize("No-At-Sign"), "no-at-sign");
        assert_eq!(normalize("@example.com"), "@example.com");
        assert_eq!(normalize("user@"), "user@");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "A.B+tag@Gmail.com",
            "  User@Example.COM  ",
            "not-an-email",
            "user+a+b@example.com",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_duplicate_check_key_is_normalized_form() {
        assert_eq!(
            get_duplicate_check_key("A.B+x@gmail.com"),
            normalize("A.B+x@gmail.com")
        );
    }
}

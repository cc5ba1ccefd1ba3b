use core::{
    fmt::{self, Display},
    ops::Deref,
};
use model::{failure, success, Failure, Outcome};
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Longest address (in UTF-16 code units, as browsers count form input) that we accept.
pub const MAX_LENGTH: usize = 100;

/// Local part of letters, digits and `._%+-`, then a domain that ends in a 2-10 letter label. The
/// rules against stray dots are checked separately since `regex` has no look-around.
///
/// See the [WHATWG definition][whatwg] and the [IANA list of top-level domains][iana].
///
/// [whatwg]: https://html.spec.whatwg.org/multipage/input.html#valid-e-mail-address
/// [iana]: http://data.iana.org/TLD/tlds-alpha-by-domain.txt
pub const PATTERN: &str = r"^([a-z0-9._%+-]+)@[a-z0-9.-]+\.[a-z]{2,10}$";

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(PATTERN)
        .case_insensitive(true)
        .build()
        .expect("email pattern must compile")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailError {
    Required,
    TooLong,
    Invalid,
}

impl EmailError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "Email address is required",
            Self::TooLong => "Email address must not exceed 100 characters",
            Self::Invalid => "Invalid email address",
        }
    }
}

impl Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<EmailError> for Failure {
    fn from(err: EmailError) -> Self {
        err.as_str().into()
    }
}

/// An email address that passed [`create_email`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Email(Box<str>);

impl Email {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Email {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the address has the right shape, ignoring its length.
pub fn is_valid_email(value: &str) -> bool {
    if value.starts_with('.') || value.ends_with('.') || value.contains("..") {
        return false;
    }
    EMAIL.is_match(value)
}

/// Validates a form field as an email address. The checks run in order and the first one that
/// fails decides the error: presence, then length, then shape.
pub fn create_email(value: Option<&str>) -> Outcome<Email> {
    let value = match value {
        Some(text) if !text.is_empty() => text,
        _ => return failure(EmailError::Required),
    };

    if value.encode_utf16().count() > MAX_LENGTH {
        return failure(EmailError::TooLong);
    }

    if !is_valid_email(value) {
        return failure(EmailError::Invalid);
    }

    success(Email(value.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(value: &str) -> Failure {
        create_email(Some(value)).unwrap_err()
    }

    #[test]
    fn accepts_valid_formats() {
        for value in [
            "test@example.com",
            "USER@EXAMPLE.COM",
            "first.last@sub.example.org",
            "user+tag@example.co",
            "user_name%x@example-host.museum",
            "user.@example.com",
        ] {
            let email = create_email(Some(value)).unwrap();
            assert_eq!(email.as_str(), value);
        }
    }

    #[test]
    fn keeps_original_value() {
        assert_eq!(create_email(Some("test@example.com")), success(Email("test@example.com".into())));
    }

    #[test]
    fn rejects_missing_values() {
        assert_eq!(create_email(None), failure(EmailError::Required));
        assert_eq!(create_email(Some("")), failure(EmailError::Required));
    }

    #[test]
    fn rejects_long_addresses_before_matching() {
        let long = format!("{}@example.com", "a".repeat(89));
        assert_eq!(long.len(), 101);
        assert_eq!(rejected(&long), Failure::from(EmailError::TooLong));

        let garbage = "!".repeat(101);
        assert_eq!(rejected(&garbage), Failure::from(EmailError::TooLong));

        let limit = format!("{}@example.com", "a".repeat(88));
        assert_eq!(limit.len(), 100);
        assert!(create_email(Some(&limit)).is_ok());
    }

    #[test]
    fn measures_length_in_utf16_units() {
        // Each emoji is a surrogate pair, so 60 of them count as 120 units.
        let emoji = "\u{1F600}".repeat(60);
        assert_eq!(rejected(&emoji), Failure::from(EmailError::TooLong));

        // Fifty of them fit, but are still not an address.
        let emoji = "\u{1F600}".repeat(50);
        assert_eq!(rejected(&emoji), Failure::from(EmailError::Invalid));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for value in ["userexample.com", "user@@example.com", "user@", "@example.com", "user@ex@ample.com"] {
            assert_eq!(rejected(value), Failure::from(EmailError::Invalid), "{value}");
        }
    }

    #[test]
    fn rejects_invalid_characters() {
        for value in [
            "user!@example.com",
            "user#@example.com",
            "user$@example.com",
            "user%^&*@example.com",
            "用户@例子.广告",
        ] {
            assert_eq!(rejected(value), Failure::from(EmailError::Invalid), "{value}");
        }
    }

    #[test]
    fn rejects_surrounding_spaces() {
        for value in [" user@example.com", "user@example.com ", " user@ example.com "] {
            assert_eq!(rejected(value), Failure::from(EmailError::Invalid), "{value:?}");
        }
    }

    #[test]
    fn rejects_stray_dots() {
        for value in ["a..b@example.com", "user..name@example.com", "user@example..com", ".user@example.com"] {
            assert_eq!(rejected(value), Failure::from(EmailError::Invalid), "{value}");
        }
    }

    #[test]
    fn rejects_invalid_top_level_domains() {
        for value in [
            "user@example.c",
            "user@example.123",
            "user@example.com.",
            "user@example.aaaaaaaaaaaaaaaaa",
            "a@b.c",
        ] {
            assert_eq!(rejected(value), Failure::from(EmailError::Invalid), "{value}");
        }
    }

    #[test]
    fn errors_surface_as_messages() {
        assert_eq!(rejected("").message(), Some("Email address is required"));
        assert_eq!(rejected("nope").message(), Some("Invalid email address"));
        assert_eq!(EmailError::TooLong.to_string(), "Email address must not exceed 100 characters");
    }
}

//! Contact form validation predicates.
//!
//! Every predicate is a pure function of the field's current text. Nothing is
//! stored: the caller renders the returned [`Validity`] immediately.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

const NAME_MIN_CHARS: usize = 2;
const PASSWORD_MIN_CHARS: usize = 8;
const MESSAGE_MIN_CHARS: usize = 10;

/// Contact form field identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Sender name.
    Name,
    /// Sender email address.
    Email,
    /// Account password.
    Password,
    /// Free-form message body.
    Message,
}

impl Field {
    /// All fields in submission order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Password, Self::Message];

    /// Position of the field in submission order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Password => 2,
            Self::Message => 3,
        }
    }

    /// Field label shown next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Message => "Message",
        }
    }

    /// Runs this field's live predicate over `text`.
    #[must_use]
    pub fn validate(self, text: &str) -> Validity {
        match self {
            Self::Name => validate_name(text),
            Self::Email => validate_email(text),
            Self::Password => validate_password(text),
            Self::Message => validate_message(text),
        }
    }

    /// Summary message shown when this field blocks a submission.
    #[must_use]
    pub const fn submit_failure_message(self) -> &'static str {
        match self {
            Self::Name => "Name is required (min 2 characters)",
            Self::Email => "Please enter a valid email address",
            Self::Password => {
                "Password must be at least 8 characters with one uppercase letter and one number"
            }
            Self::Message => "Please enter a message (min 10 characters)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one predicate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    /// Whether the field passed.
    pub valid: bool,
    /// Message rendered next to the field.
    pub message: &'static str,
}

impl Validity {
    const fn ok(message: &'static str) -> Self {
        Self {
            valid: true,
            message,
        }
    }

    const fn invalid(message: &'static str) -> Self {
        Self {
            valid: false,
            message,
        }
    }
}

fn email_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"))
}

/// Returns whether `email` looks like `local@domain.tld`.
///
/// The text is matched as given: surrounding whitespace makes it invalid.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Returns whether `password` has 8+ characters, an uppercase letter and a digit.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_CHARS
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Validates the name field.
#[must_use]
pub fn validate_name(text: &str) -> Validity {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Validity::invalid("Name is required")
    } else if trimmed.chars().count() < NAME_MIN_CHARS {
        Validity::invalid("Name must be at least 2 characters")
    } else {
        Validity::ok("✓ Looks good!")
    }
}

/// Validates the email field.
#[must_use]
pub fn validate_email(text: &str) -> Validity {
    if text.trim().is_empty() {
        Validity::invalid("Email is required")
    } else if !is_valid_email(text) {
        Validity::invalid("Please enter a valid email address")
    } else {
        Validity::ok("✓ Valid email format")
    }
}

/// Validates the password field, reporting the first failing rule.
#[must_use]
pub fn validate_password(text: &str) -> Validity {
    if text.is_empty() {
        Validity::invalid("Password is required")
    } else if text.chars().count() < PASSWORD_MIN_CHARS {
        Validity::invalid("Password must be at least 8 characters")
    } else if !text.chars().any(|c| c.is_ascii_uppercase()) {
        Validity::invalid("Password must include at least one uppercase letter")
    } else if !text.chars().any(|c| c.is_ascii_digit()) {
        Validity::invalid("Password must include at least one number")
    } else {
        Validity::ok("✓ Strong password")
    }
}

/// Validates the message field.
#[must_use]
pub fn validate_message(text: &str) -> Validity {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Validity::invalid("Message is required")
    } else if trimmed.chars().count() < MESSAGE_MIN_CHARS {
        Validity::invalid("Message must be at least 10 characters")
    } else {
        Validity::ok("✓ Looks good!")
    }
}

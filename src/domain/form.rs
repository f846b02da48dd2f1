//! Contact form fields and their validation rules.
//!
//! The contact form has exactly three fields. Each field's error state is a
//! pure function of its current raw value: [`validate`] trims the value and
//! applies the field's rule, with no memory of earlier attempts.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Minimum trimmed length of the sender's name, in UTF-16 code units.
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum trimmed length of the message body, in UTF-16 code units.
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Zero width no-break space. Browsers treat it as whitespace.
const BOM: char = '\u{feff}';

/// `local@domain.tld` with no whitespace and no second `@`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern compiles")
});

/// Message shown next to an invalid name field.
pub const NAME_ERROR: &str = "Please enter a valid name (at least 2 characters)";

/// Message shown next to an invalid email field.
pub const EMAIL_ERROR: &str = "Please enter a valid email address";

/// Message shown next to an invalid message field.
pub const MESSAGE_ERROR: &str = "Please enter a message (minimum 10 characters)";

/// One of the three contact form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Email,
    Message,
}

impl FieldName {
    /// All fields in document order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// The value of the input's `name` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Parses an input's `name` attribute. Unknown names are not form fields.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }

    /// Inline message displayed when this field fails validation.
    #[must_use]
    pub const fn error_message(self) -> &'static str {
        match self {
            Self::Name => NAME_ERROR,
            Self::Email => EMAIL_ERROR,
            Self::Message => MESSAGE_ERROR,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contact form input and its current error display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub raw_value: String,
    pub error_message: Option<String>,
}

impl FormField {
    /// Creates an empty field with no error shown.
    #[must_use]
    pub const fn new(name: FieldName) -> Self {
        Self {
            name,
            raw_value: String::new(),
            error_message: None,
        }
    }

    /// Validates the current raw value and records the outcome on the field.
    pub fn revalidate(&mut self) -> ValidationResult {
        let result = validate(self.name, &self.raw_value);
        self.error_message = result.message.map(str::to_string);
        result
    }

    /// Empties the value and hides any error.
    pub fn reset(&mut self) {
        self.raw_value.clear();
        self.error_message = None;
    }
}

/// Outcome of validating one field. Produced and consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub field_name: FieldName,
    pub is_valid: bool,
    pub message: Option<&'static str>,
}

impl ValidationResult {
    const fn valid(field_name: FieldName) -> Self {
        Self {
            field_name,
            is_valid: true,
            message: None,
        }
    }

    const fn invalid(field_name: FieldName) -> Self {
        Self {
            field_name,
            is_valid: false,
            message: Some(field_name.error_message()),
        }
    }
}

/// Validates a raw input value against the rule for `field`.
///
/// Values are trimmed with [`trim_input`] before checking. Lengths count
/// UTF-16 code units, the way browsers measure input values, so a character
/// outside the Basic Multilingual Plane counts twice.
///
/// # Example
///
/// ```
/// use portfolio_ui::domain::{validate, FieldName};
///
/// assert!(validate(FieldName::Email, " ada@example.com ").is_valid);
/// assert!(!validate(FieldName::Name, " A ").is_valid);
/// ```
#[must_use]
pub fn validate(field: FieldName, raw: &str) -> ValidationResult {
    let value = trim_input(raw);
    let ok = match field {
        FieldName::Name => value.encode_utf16().count() >= NAME_MIN_CHARS,
        FieldName::Email => is_valid_email(value),
        FieldName::Message => value.encode_utf16().count() >= MESSAGE_MIN_CHARS,
    };

    if ok {
        ValidationResult::valid(field)
    } else {
        ValidationResult::invalid(field)
    }
}

/// Strips the whitespace a browser strips from an input value: Unicode
/// white space except U+0085, plus U+FEFF.
#[must_use]
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == BOM)
}

/// Returns `true` if `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Trimmed values of a form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    /// Builds a submission from raw values, trimming each.
    #[must_use]
    pub fn from_raw(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: trim_input(name).to_string(),
            email: trim_input(email).to_string(),
            message: trim_input(message).to_string(),
        }
    }

    /// Text of the notification confirming a sent message.
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "Thank you {}! Your message has been sent successfully. I'll get back to you soon.",
            self.name
        )
    }
}

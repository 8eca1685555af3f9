use crate::domain::validation::ValidationError;

use phonenumber::country;

/// International dialing prefix expected by the gateway.
const INTERNATIONAL_PREFIX: &str = "00";

/// Maximum length of an all-digit sender.
pub const SENDER_MAX_DIGITS: usize = 16;

/// Maximum length of an alphanumeric sender name.
pub const SENDER_MAX_ALPHANUMERIC: usize = 11;

fn normalize_plus(value: &str) -> String {
    match value.strip_prefix('+') {
        Some(rest) => format!("{INTERNATIONAL_PREFIX}{rest}"),
        None => value.to_owned(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Receiver mobile number in international `00` notation (`receiver`).
///
/// Invariant: starts with `00`. A leading `+` is rewritten to `00` on construction.
pub struct Receiver(String);

impl Receiver {
    /// Query parameter name used by the gateway (`receiver`).
    pub const FIELD: &'static str = "receiver";

    /// Normalize a leading `+` and require the `00` prefix.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let normalized = normalize_plus(&value);
        if !normalized.starts_with(INTERNATIONAL_PREFIX) {
            return Err(ValidationError::InvalidReceiver { input: value });
        }
        Ok(Self(normalized))
    }

    /// Parse a national or international number and convert it to `00` notation.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let trimmed = input.trim();
        let parsed = phonenumber::parse(default_region, trimmed).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: trimmed.to_owned(),
            }
        })?;
        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        Self::new(e164)
    }

    /// Borrow the normalized number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Sender number or name (`sender`).
///
/// Invariants:
/// - only ASCII letters and digits (after a leading `+` became `00`),
/// - at most 16 characters when all digits,
/// - at most 11 characters otherwise.
pub struct Sender(String);

impl Sender {
    /// Query parameter name used by the gateway (`sender`).
    pub const FIELD: &'static str = "sender";

    /// Create a validated [`Sender`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let normalized = normalize_plus(&value);

        if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::InvalidSenderCharacters { input: value });
        }

        // ASCII only past this point, so bytes == characters.
        let max = if normalized.bytes().all(|b| b.is_ascii_digit()) {
            SENDER_MAX_DIGITS
        } else {
            SENDER_MAX_ALPHANUMERIC
        };
        if normalized.len() > max {
            return Err(ValidationError::SenderTooLong {
                max,
                actual: normalized.len(),
            });
        }

        Ok(Self(normalized))
    }

    /// Whether the sender is a number rather than a name.
    pub fn is_numeric(&self) -> bool {
        self.0.bytes().all(|b| b.is_ascii_digit())
    }

    /// Borrow the validated sender.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

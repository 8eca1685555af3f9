use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidReceiver { input: String },
    InvalidSenderCharacters { input: String },
    SenderTooLong { max: usize, actual: usize },
    MessageTooLong { max: usize, actual: usize },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidReceiver { input } => {
                write!(f, "receiver is invalid: {input} (expected 00 or + prefix)")
            }
            Self::InvalidSenderCharacters { input } => {
                write!(f, "sender contains invalid characters: {input}")
            }
            Self::SenderTooLong { max, actual } => {
                write!(f, "sender too long: {actual} characters (max {max})")
            }
            Self::MessageTooLong { max, actual } => {
                write!(
                    f,
                    "message too long for type text SMS: {actual} bytes (max {max})"
                )
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

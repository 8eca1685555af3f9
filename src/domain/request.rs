use serde::{Deserialize, Serialize};

/// Byte limit of a single plain-text SMS.
pub const TEXT_SMS_MAX_BYTES: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// Message type (`msgtype`).
pub enum MessageType {
    /// Single plain-text SMS, at most 160 bytes.
    #[default]
    #[serde(rename = "t")]
    Text,
    /// Concatenated SMS, split into segments by the gateway.
    #[serde(rename = "c")]
    Overlong,
    /// Unicode SMS.
    #[serde(rename = "utf8")]
    Utf8,
}

impl MessageType {
    /// Query parameter name used by the gateway (`msgtype`).
    pub const FIELD: &'static str = "msgtype";

    /// Wire code sent to the gateway.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "t",
            Self::Overlong => "c",
            Self::Utf8 => "utf8",
        }
    }

    /// Byte limit enforced locally for this type, if any.
    pub fn max_bytes(self) -> Option<usize> {
        match self {
            Self::Text => Some(TEXT_SMS_MAX_BYTES),
            Self::Overlong | Self::Utf8 => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// Gateway tariff plan.
///
/// Only relevant for accounts with a combined tariff booked; routing and billing happen
/// on the gateway side.
pub enum SubmissionPlan {
    #[default]
    #[serde(rename = "OA")]
    Basic,
    #[serde(rename = "MA")]
    Economy,
    #[serde(rename = "PM")]
    Quality,
}

impl SubmissionPlan {
    /// Plan code as the gateway names it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "OA",
            Self::Economy => "MA",
            Self::Quality => "PM",
        }
    }
}

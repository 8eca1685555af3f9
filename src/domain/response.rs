use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Result of an accepted submission: `OK(message_id,message_count)`.
pub struct Submission {
    /// Gateway id of the submitted message.
    pub message_id: i64,
    /// Number of SMS segments the message was split into.
    pub message_count: i64,
}

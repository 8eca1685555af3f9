use time::OffsetDateTime;

use crate::domain::request::{MessageType, SubmissionPlan};
use crate::domain::response::Submission;
use crate::domain::validation::ValidationError;
use crate::domain::value::{Receiver, Sender};

#[derive(Debug, Clone, Default)]
/// A single SMS submission.
///
/// Receiver, sender and message text are validated when they are set, so an invalid
/// value never reaches the stored field. Everything else is stored as given.
///
/// After a successful [`Message::submit`](crate::Message::submit) the gateway's message id
/// and segment count are available through [`Message::message_id`] and
/// [`Message::message_count`]. Every submit attempt clears them first.
pub struct Message {
    receiver: Option<Receiver>,
    sender: Option<Sender>,
    message: String,
    message_type: MessageType,
    submission_plan: SubmissionPlan,
    account_id: String,
    account_password: String,
    delayed_submission: bool,
    planned_submission_date: Option<OffsetDateTime>,
    debug_mode: bool,
    submission: Option<Submission>,
}

impl Message {
    /// Create an empty message with text type, basic plan and debug mode off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receiver(&self) -> Option<&Receiver> {
        self.receiver.as_ref()
    }

    /// Set the receiver; a leading `+` becomes `00`, anything not starting with `00` is rejected.
    pub fn set_receiver(
        &mut self,
        receiver: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        self.receiver = Some(Receiver::new(receiver)?);
        Ok(self)
    }

    pub fn sender(&self) -> Option<&Sender> {
        self.sender.as_ref()
    }

    /// Set the sender number (max 16 digits) or name (max 11 alphanumeric characters).
    pub fn set_sender(&mut self, sender: impl Into<String>) -> Result<&mut Self, ValidationError> {
        self.sender = Some(Sender::new(sender)?);
        Ok(self)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Set the message text.
    ///
    /// The length is checked against the message type that is current at the time of the
    /// call, so set the type first.
    pub fn set_message(
        &mut self,
        message: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        let message = message.into();
        if let Some(max) = self.message_type.max_bytes() {
            if message.len() > max {
                return Err(ValidationError::MessageTooLong {
                    max,
                    actual: message.len(),
                });
            }
        }
        self.message = message;
        Ok(self)
    }

    pub fn message_type(&self) -> MessageType {
        self.message_type
    }

    pub fn set_message_type(&mut self, message_type: MessageType) -> &mut Self {
        self.message_type = message_type;
        self
    }

    pub fn submission_plan(&self) -> SubmissionPlan {
        self.submission_plan
    }

    pub fn set_submission_plan(&mut self, submission_plan: SubmissionPlan) -> &mut Self {
        self.submission_plan = submission_plan;
        self
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn set_account_id(&mut self, account_id: impl Into<String>) -> &mut Self {
        self.account_id = account_id.into();
        self
    }

    pub fn account_password(&self) -> &str {
        &self.account_password
    }

    pub fn set_account_password(&mut self, account_password: impl Into<String>) -> &mut Self {
        self.account_password = account_password.into();
        self
    }

    pub fn delayed_submission(&self) -> bool {
        self.delayed_submission
    }

    /// Whether [`Message::planned_submission_date`] is sent to the gateway.
    pub fn set_delayed_submission(&mut self, delayed_submission: bool) -> &mut Self {
        self.delayed_submission = delayed_submission;
        self
    }

    pub fn planned_submission_date(&self) -> Option<OffsetDateTime> {
        self.planned_submission_date
    }

    /// Set the planned delivery time. It is formatted in the offset it carries.
    pub fn set_planned_submission_date(&mut self, date: OffsetDateTime) -> &mut Self {
        self.planned_submission_date = Some(date);
        self
    }

    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// In debug mode the gateway simulates the submission without delivering it.
    pub fn set_debug_mode(&mut self, debug_mode: bool) -> &mut Self {
        self.debug_mode = debug_mode;
        self
    }

    /// Gateway id of the last successful submission.
    pub fn message_id(&self) -> Option<i64> {
        self.submission.map(|it| it.message_id)
    }

    /// Number of SMS segments of the last successful submission.
    pub fn message_count(&self) -> Option<i64> {
        self.submission.map(|it| it.message_count)
    }

    /// Full result of the last successful submission.
    pub fn submission(&self) -> Option<Submission> {
        self.submission
    }

    pub(crate) fn clear_submission(&mut self) {
        self.submission = None;
    }

    pub(crate) fn record_submission(&mut self, submission: Submission) {
        self.submission = Some(submission);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_message_has_defaults() {
        let message = Message::new();
        assert_eq!(message.message_type(), MessageType::Text);
        assert_eq!(message.submission_plan(), SubmissionPlan::Basic);
        assert!(!message.delayed_submission());
        assert!(!message.debug_mode());
        assert!(message.receiver().is_none());
        assert!(message.message_id().is_none());
        assert!(message.message_count().is_none());
    }

    #[test]
    fn setters_chain() {
        let mut message = Message::new();
        message
            .set_receiver("+491711234567")
            .unwrap()
            .set_sender("Shop")
            .unwrap()
            .set_account_id("acc")
            .set_account_password("secret")
            .set_debug_mode(true);

        assert_eq!(message.receiver().unwrap().as_str(), "00491711234567");
        assert_eq!(message.sender().unwrap().as_str(), "Shop");
        assert_eq!(message.account_id(), "acc");
        assert_eq!(message.account_password(), "secret");
        assert!(message.debug_mode());
    }

    #[test]
    fn invalid_receiver_keeps_previous_value() {
        let mut message = Message::new();
        message.set_receiver("0049171").unwrap();
        assert!(message.set_receiver("49171").is_err());
        assert_eq!(message.receiver().unwrap().as_str(), "0049171");
    }

    #[test]
    fn text_message_accepts_exactly_160_bytes() {
        let mut message = Message::new();
        assert!(message.set_message("a".repeat(160)).is_ok());
        assert_eq!(
            message.set_message("a".repeat(161)).unwrap_err(),
            ValidationError::MessageTooLong {
                max: 160,
                actual: 161
            }
        );
        assert_eq!(message.message().len(), 160);
    }

    #[test]
    fn text_message_limit_counts_bytes_not_characters() {
        let mut message = Message::new();
        // 81 two-byte characters.
        assert!(message.set_message("ü".repeat(81)).is_err());
        assert!(message.set_message("ü".repeat(80)).is_ok());
    }

    #[test]
    fn overlong_and_utf8_types_accept_any_length() {
        let mut message = Message::new();
        message.set_message_type(MessageType::Overlong);
        assert!(message.set_message("a".repeat(1000)).is_ok());

        message.set_message_type(MessageType::Utf8);
        assert!(message.set_message("ü".repeat(1000)).is_ok());
    }

    #[test]
    fn record_and_clear_submission() {
        let mut message = Message::new();
        message.record_submission(Submission {
            message_id: 7,
            message_count: 1,
        });
        assert_eq!(message.message_id(), Some(7));
        assert_eq!(message.message_count(), Some(1));

        message.clear_submission();
        assert!(message.submission().is_none());
    }
}

//! Domain layer: strong types with validation and invariants (no I/O).

mod message;
mod request;
mod response;
mod validation;
mod value;

pub use message::Message;
pub use request::{MessageType, SubmissionPlan, TEXT_SMS_MAX_BYTES};
pub use response::Submission;
pub use validation::ValidationError;
pub use value::{Receiver, SENDER_MAX_ALPHANUMERIC, SENDER_MAX_DIGITS, Sender};

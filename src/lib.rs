//! Typed blocking Rust client for the Goyya Mobile SMS gateway.
//!
//! The crate has three layers: a domain layer of validated value types, a transport
//! layer for the gateway's wire-format quirks, and a small client layer that issues the
//! HTTP request.
//!
//! ```rust,no_run
//! use goyya::{Message, MessageType};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut message = Message::new();
//!     message
//!         .set_account_id("...")
//!         .set_account_password("...")
//!         .set_message_type(MessageType::Overlong)
//!         .set_receiver("+491711234567")?
//!         .set_sender("MyShop")?
//!         .set_message("hello")?;
//!
//!     let submission = message.submit()?;
//!     println!("id {} in {} parts", submission.message_id, submission.message_count);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{GatewayClient, GatewayClientBuilder, SubmitError};
pub use domain::{
    Message, MessageType, Receiver, Sender, Submission, SubmissionPlan, ValidationError,
};

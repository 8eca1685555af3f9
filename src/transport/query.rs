use time::OffsetDateTime;
use time::macros::format_description;
use url::form_urlencoded;

use crate::domain::{Message, MessageType, Receiver, Sender};

const NOT_DELAYED: &str = "0";

/// Query parameters for a submission, in wire order.
///
/// Values are raw bytes: `msg` is ISO-8859-1, everything else is ASCII or UTF-8 as given.
pub fn encode_submit_params(message: &Message) -> Vec<(&'static str, Vec<u8>)> {
    let flag = |on: bool| if on { b"1".to_vec() } else { b"0".to_vec() };

    vec![
        (
            Receiver::FIELD,
            message
                .receiver()
                .map(|it| it.as_str().as_bytes().to_vec())
                .unwrap_or_default(),
        ),
        (
            Sender::FIELD,
            message
                .sender()
                .map(|it| it.as_str().as_bytes().to_vec())
                .unwrap_or_default(),
        ),
        ("msg", to_latin1(message.message())),
        ("id", message.account_id().as_bytes().to_vec()),
        ("pw", message.account_password().as_bytes().to_vec()),
        ("time", planned_time(message).into_bytes()),
        (
            MessageType::FIELD,
            message.message_type().as_str().as_bytes().to_vec(),
        ),
        ("getId", b"1".to_vec()),
        ("countMsg", b"1".to_vec()),
        ("test", flag(message.debug_mode())),
    ]
}

/// Form-urlencode `params` (`+` for space, everything non-alphanumeric percent-encoded).
pub fn serialize_query(params: &[(&str, Vec<u8>)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            let key: String = form_urlencoded::byte_serialize(key.as_bytes()).collect();
            let value: String = form_urlencoded::byte_serialize(value).collect();
            format!("{key}={value}")
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Append `query` to `base`, continuing an existing query string if there is one.
pub fn build_url(base: &str, query: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}

/// Full request URL for `message` against `endpoint`.
pub fn encode_submit_url(endpoint: &str, message: &Message) -> String {
    build_url(endpoint, &serialize_query(&encode_submit_params(message)))
}

/// Re-encode as ISO-8859-1; characters outside Latin-1 become `?`.
pub fn to_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(c).unwrap_or(b'?'))
        .collect()
}

fn planned_time(message: &Message) -> String {
    if !message.delayed_submission() {
        return NOT_DELAYED.to_owned();
    }
    match message.planned_submission_date() {
        Some(date) => format_planned_date(date),
        None => {
            tracing::warn!("delayed submission enabled without a planned date; sending now");
            NOT_DELAYED.to_owned()
        }
    }
}

/// `HHmmddMMYYYY`, the gateway's planned-submission format.
fn format_planned_date(date: OffsetDateTime) -> String {
    date.format(format_description!("[hour][minute][day][month][year]"))
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "could not format planned submission date");
            NOT_DELAYED.to_owned()
        })
}

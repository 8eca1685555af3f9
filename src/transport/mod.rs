//! Transport layer: wire-format details (query encoding, response parsing).

mod query;
mod response;

pub use query::encode_submit_url;
pub use response::{decode_latin1, decode_submission, strip_header_blocks};

use crate::domain::Submission;

const BLOCK_SEPARATOR: &str = "\r\n\r\n";
const OK_PREFIX: &str = "OK";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("gateway rejected the request: {body}")]
    Rejected { body: String },

    #[error("malformed OK response: {body}")]
    Malformed { body: String },
}

impl TransportError {
    /// The response body the error was produced from.
    pub fn into_body(self) -> String {
        match self {
            Self::Rejected { body } | Self::Malformed { body } => body,
        }
    }
}

/// Strip the header blocks from a raw response and return the body.
///
/// A redirected exchange carries one header block per hop, each followed by a blank line.
/// Blocks are consumed until the last one read carries a decisive status (2xx or >= 400),
/// `max_blocks` blocks have been consumed, or no further blank line remains. Without any
/// blank line the input is all body.
pub fn strip_header_blocks(raw: &str, max_blocks: usize) -> &str {
    let mut rest = raw;
    let mut consumed = 0;
    while consumed < max_blocks {
        let Some((header, body)) = rest.split_once(BLOCK_SEPARATOR) else {
            break;
        };
        rest = body;
        consumed += 1;
        if is_decisive(header_status(header)) {
            break;
        }
    }
    rest
}

/// Decode ISO-8859-1 bytes. Every byte maps to one character, so nothing is lost.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Status code from the first line of a header block, or `0` if there is none.
///
/// Takes the token after the status line's first space, truncated to three characters.
pub fn header_status(header: &str) -> u16 {
    let status_line = header.lines().next().unwrap_or_default().trim();
    let Some((_, after_version)) = status_line.split_once(' ') else {
        return 0;
    };
    let digits = after_version
        .trim_start()
        .chars()
        .take(3)
        .take_while(char::is_ascii_digit)
        .collect::<String>();
    digits.parse().unwrap_or(0)
}

fn is_decisive(status: u16) -> bool {
    (200..=299).contains(&status) || status >= 400
}

/// Parse an `OK(message_id,message_count)` body.
pub fn decode_submission(body: &str) -> Result<Submission, TransportError> {
    if !body.starts_with(OK_PREFIX) {
        return Err(TransportError::Rejected {
            body: body.to_owned(),
        });
    }

    let malformed = || TransportError::Malformed {
        body: body.to_owned(),
    };

    let inner = body
        .trim_start_matches([' ', 'O', 'K'])
        .trim_matches(|c: char| c.is_whitespace() || c == '(' || c == ')');
    let (id, count) = inner.split_once(',').ok_or_else(malformed)?;
    if count.contains(',') {
        return Err(malformed());
    }

    Ok(Submission {
        message_id: id.trim().parse().map_err(|_| malformed())?,
        message_count: count.trim().parse().map_err(|_| malformed())?,
    })
}

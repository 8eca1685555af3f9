//! Client layer: issues the gateway request and maps transport ↔ domain.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::domain::{Message, Submission};

const DEFAULT_ENDPOINT: &str = "https://gate1.goyyamobile.com/sms/sendsms.asp";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_USER_AGENT: &str = concat!("goyya-rs/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
struct HttpResponse {
    /// Final status after redirects.
    status: u16,
    /// Header block(s), a blank line, then the body.
    raw: String,
    /// Number of header blocks at the front of `raw`.
    header_blocks: usize,
}

trait HttpTransport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "*/*")
            .header(CONTENT_TYPE, "*/*")
            .send()?;
        let status = response.status().as_u16();
        let head = render_head(&response);
        let body = crate::transport::decode_latin1(&response.bytes()?);
        Ok(HttpResponse {
            status,
            raw: format!("{head}\r\n\r\n{body}"),
            header_blocks: 1,
        })
    }
}

/// Status line and headers of the final response, as they appeared on the wire.
///
/// reqwest follows redirects internally, so only the last hop's block is rendered.
fn render_head(response: &reqwest::blocking::Response) -> String {
    let mut lines = vec![format!("{:?} {}", response.version(), response.status())];
    for (name, value) in response.headers() {
        lines.push(format!(
            "{}: {}",
            name,
            String::from_utf8_lossy(value.as_bytes())
        ));
    }
    lines.join("\r\n")
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GatewayClient::submit`] and [`Message::submit`].
///
/// [`SubmitError::Transport`] and [`SubmitError::HttpStatus`] are network errors;
/// [`SubmitError::Gateway`] means the gateway answered but did not accept the message.
pub enum SubmitError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful final HTTP status code.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The gateway answered with something other than `OK(id,count)`.
    #[error("gateway error: {body}")]
    Gateway { body: String },
}

impl SubmitError {
    /// Whether the request failed before the gateway could answer.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }

    /// Whether the gateway answered and refused the message.
    pub fn is_gateway(&self) -> bool {
        matches!(self, Self::Gateway { .. })
    }
}

#[derive(Debug, Clone)]
/// Builder for [`GatewayClient`].
///
/// Use this when you need to customize the endpoint, timeout, or user-agent.
pub struct GatewayClientBuilder {
    endpoint: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for GatewayClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GatewayClientBuilder {
    /// Create a builder with the default endpoint, a 5 second timeout and the crate user-agent.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the gateway URL. An existing query string is kept and extended.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the time budget for the entire request, redirects included.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build a [`GatewayClient`].
    pub fn build(self) -> Result<GatewayClient, SubmitError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .pool_max_idle_per_host(0)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|err| SubmitError::Transport(Box::new(err)))?;

        Ok(GatewayClient {
            endpoint: self.endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Blocking client for the Goyya Mobile gateway.
///
/// Every call opens its own connection; idle connections are never kept.
pub struct GatewayClient {
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl GatewayClient {
    /// Create a client with default settings.
    pub fn new() -> Result<Self, SubmitError> {
        GatewayClientBuilder::new().build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> GatewayClientBuilder {
        GatewayClientBuilder::new()
    }

    /// Gateway URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send `message` and return the gateway's id and segment count.
    ///
    /// Errors:
    /// - [`SubmitError::Transport`] when the request could not be completed,
    /// - [`SubmitError::HttpStatus`] for a non-2xx final status (checked before the body),
    /// - [`SubmitError::Gateway`] when the body is not `OK(id,count)`.
    pub fn submit(&self, message: &Message) -> Result<Submission, SubmitError> {
        let url = crate::transport::encode_submit_url(&self.endpoint, message);
        tracing::debug!(
            endpoint = %self.endpoint,
            receiver = message.receiver().map(|it| it.as_str()).unwrap_or_default(),
            msgtype = message.message_type().as_str(),
            test = message.debug_mode(),
            "submitting message"
        );

        let response = self.http.get(&url).map_err(SubmitError::Transport)?;
        let body = crate::transport::strip_header_blocks(&response.raw, response.header_blocks);

        if !(200..=299).contains(&response.status) {
            tracing::warn!(status = response.status, "gateway returned HTTP error");
            let body = if body.trim().is_empty() {
                None
            } else {
                Some(body.to_owned())
            };
            return Err(SubmitError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let submission = crate::transport::decode_submission(body).map_err(|err| {
            tracing::warn!(error = %err, "gateway did not accept message");
            SubmitError::Gateway {
                body: err.into_body(),
            }
        })?;

        tracing::debug!(
            message_id = submission.message_id,
            message_count = submission.message_count,
            "message accepted"
        );
        Ok(submission)
    }
}

impl Message {
    /// Submit through a freshly built default [`GatewayClient`].
    ///
    /// On success the id and count are stored on the message; on failure they stay unset.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        self.clear_submission();
        let client = GatewayClient::new()?;
        self.submit_with(&client)
    }

    /// Submit through `client`. See [`Message::submit`].
    pub fn submit_with(&mut self, client: &GatewayClient) -> Result<Submission, SubmitError> {
        self.clear_submission();
        let submission = client.submit(self)?;
        self.record_submission(submission);
        Ok(submission)
    }
}

use async_trait::async_trait;

#[derive(Clone)]
pub struct RequestArgs {
    pub url: String,
    pub timeout_ms: u64,
}

impl RequestArgs {
    #[must_use]
    pub fn new(url: String, timeout_ms: u64) -> Self {
        RequestArgs { url, timeout_ms }
    }
}

/// `status_code` is 0 when no response was received; `error` then carries
/// the transport error text and `timed_out` marks deadline expiry.
pub struct Response {
    pub status_code: u16,
    pub data: Option<Vec<u8>>,
    pub error: Option<String>,
    pub timed_out: bool,
}

#[async_trait]
pub trait NetworkProvider: Sync + Send {
    async fn send(&self, args: &RequestArgs) -> Response;
}

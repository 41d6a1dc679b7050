use std::time::Duration;

use async_trait::async_trait;

use crate::key_masker::sanitize_api_key;
use crate::log_w;
use crate::networking::{NetworkProvider, RequestArgs, Response};

const TAG: &str = stringify!(NetworkProviderReqwest);

const DEFAULT_TIMEOUT_MS: u64 = 10_000;

pub struct NetworkProviderReqwest {
    client: reqwest::Client,
}

impl Default for NetworkProviderReqwest {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkProviderReqwest {
    #[must_use]
    pub fn new() -> Self {
        NetworkProviderReqwest {
            client: reqwest::Client::new(),
        }
    }

    fn build_request(&self, args: &RequestArgs) -> reqwest::RequestBuilder {
        let timeout_duration = match args.timeout_ms > 0 {
            true => Duration::from_millis(args.timeout_ms),
            false => Duration::from_millis(DEFAULT_TIMEOUT_MS),
        };

        self.client.get(&args.url).timeout(timeout_duration)
    }
}

#[async_trait]
impl NetworkProvider for NetworkProviderReqwest {
    async fn send(&self, args: &RequestArgs) -> Response {
        let request = self.build_request(args);

        match request.send().await {
            Ok(response) => {
                let status_code = response.status().as_u16();
                let data = response.bytes().await.ok().map(|bytes| bytes.to_vec());
                Response {
                    status_code,
                    data,
                    error: None,
                    timed_out: false,
                }
            }
            Err(e) => {
                let timed_out = e.is_timeout();
                let error_message = get_error_message(e);
                log_w!(
                    TAG,
                    "Request error: {} {}",
                    sanitize_api_key(&args.url),
                    error_message
                );
                Response {
                    status_code: 0,
                    data: None,
                    error: Some(error_message),
                    timed_out,
                }
            }
        }
    }
}

fn get_error_message(error: reqwest::Error) -> String {
    let mut error_message = error.to_string();

    if let Some(status_error) = error.status() {
        error_message.push_str(&format!(". Status: {}", status_error));
    }

    sanitize_api_key(&error_message)
}

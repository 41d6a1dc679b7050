use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::key_masker::sanitize_api_key;
use crate::log_d;
use crate::networking::{NetworkProvider, NetworkProviderReqwest, RequestArgs, Response};

pub const DEFAULT_ENDPOINT_URL: &str = "https://api-tennis.com/tennis/";

const TAG: &str = stringify!(KeyChecker);

const TIMEOUT_DETAIL: &str = "Timeout (no response within the limit)";

/// Result of validating a single key. `status_code` is `None` when no
/// response was received; `elapsed` is always populated.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub ok: bool,
    pub status_code: Option<u16>,
    pub elapsed: f64,
    pub detail: String,
}

pub struct KeyChecker {
    endpoint_url: String,
    network: Arc<dyn NetworkProvider>,
}

impl KeyChecker {
    #[must_use]
    pub fn new(endpoint_url: Option<&String>, network: Option<Arc<dyn NetworkProvider>>) -> Self {
        KeyChecker {
            endpoint_url: endpoint_url
                .cloned()
                .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string()),
            network: network.unwrap_or_else(|| Arc::new(NetworkProviderReqwest::new())),
        }
    }

    /// Issues exactly one GET for the given key and classifies the response.
    /// Never returns an error: every failure mode becomes a failed outcome.
    pub async fn check_key(&self, key: &str, timeout_ms: u64) -> CheckOutcome {
        let url = construct_probe_url(&self.endpoint_url, key.trim());
        let request_args = RequestArgs::new(url, timeout_ms);

        let start = Instant::now();
        let response = self.network.send(&request_args).await;
        let outcome = classify_response(&response, start.elapsed().as_secs_f64());

        log_d!(
            TAG,
            "{} -> ok:{} status:{:?} ({:.3}s)",
            sanitize_api_key(&request_args.url),
            outcome.ok,
            outcome.status_code,
            outcome.elapsed
        );

        outcome
    }
}

fn construct_probe_url(endpoint_url: &str, api_key: &str) -> String {
    format!("{endpoint_url}?method=get_countries&APIkey={api_key}")
}

fn classify_response(response: &Response, elapsed: f64) -> CheckOutcome {
    if response.timed_out {
        return CheckOutcome {
            ok: false,
            status_code: None,
            elapsed,
            detail: TIMEOUT_DETAIL.to_string(),
        };
    }

    if response.status_code == 0 || response.error.is_some() {
        let error = response.error.as_deref().unwrap_or("no response received");
        return CheckOutcome {
            ok: false,
            status_code: None,
            elapsed,
            detail: format!("Request error: {}", sanitize_api_key(error)),
        };
    }

    let status_code = response.status_code;
    let (ok, detail) = match status_code {
        200 => {
            let body = parse_body_as_object(response.data.as_deref());
            if body.contains_key("result") {
                (true, "OK (200 with 'result' in the response)".to_string())
            } else {
                (false, "200 but no 'result' field in the response".to_string())
            }
        }
        401 => (
            false,
            "401 Unauthorized (invalid API key or missing permissions)".to_string(),
        ),
        403 => (false, "403 Forbidden (access denied)".to_string()),
        429 => (
            false,
            "429 Too Many Requests (call limit reached)".to_string(),
        ),
        _ => (false, format!("HTTP error {status_code}")),
    };

    CheckOutcome {
        ok,
        status_code: Some(status_code),
        elapsed,
        detail,
    }
}

// A body that fails to decode, or decodes to a non-object, counts as empty.
fn parse_body_as_object(data: Option<&[u8]>) -> Map<String, Value> {
    let raw = match data {
        Some(raw) => raw,
        None => return Map::new(),
    };

    match serde_json::from_slice::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

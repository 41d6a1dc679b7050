use crate::check_report::{KeyCheckReport, ResultRow};
use crate::key_checker::KeyChecker;
use crate::key_masker::mask_key;
use crate::keyprobe_err::KeyprobeErr;
use crate::keyprobe_options::{KeyprobeOptions, DEFAULT_REQUEST_TIMEOUT_S};
use crate::output_logger::initialize_output_logger;
use crate::log_i;

const TAG: &str = stringify!(Keyprobe);

pub struct Keyprobe {
    checker: KeyChecker,
    timeout_s: f64,
}

impl Keyprobe {
    #[must_use]
    pub fn new(options: Option<KeyprobeOptions>) -> Self {
        let options = options.unwrap_or_default();
        initialize_output_logger(&options.output_log_level);

        Keyprobe {
            checker: KeyChecker::new(
                options.endpoint_url.as_ref(),
                options.network_provider.clone(),
            ),
            timeout_s: options
                .request_timeout_s
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_S),
        }
    }

    /// Checks each key sequentially, one request at a time, and returns one
    /// row per key in input order. A failing key never aborts the run.
    pub async fn check_keys(&self, keys: &[String]) -> Result<KeyCheckReport, KeyprobeErr> {
        if !(self.timeout_s > 0.0) {
            return Err(KeyprobeErr::InvalidTimeout(format!(
                "request timeout must be positive, got {}",
                self.timeout_s
            )));
        }

        let keys: Vec<&str> = keys
            .iter()
            .map(|key| key.trim())
            .filter(|key| !key.is_empty())
            .collect();
        if keys.is_empty() {
            return Err(KeyprobeErr::NoKeysProvided);
        }

        let timeout_ms = (self.timeout_s * 1000.0) as u64;
        let total = keys.len();
        log_i!(TAG, "Checking {} API key(s)...", total);

        let mut rows = Vec::with_capacity(total);
        for (idx, key) in keys.iter().enumerate() {
            log_i!(TAG, "Checking key {}/{} ({})", idx + 1, total, mask_key(key));
            let outcome = self.checker.check_key(key, timeout_ms).await;
            rows.push(ResultRow::from_outcome(key, &outcome));
        }

        let report = KeyCheckReport { rows };
        log_i!(
            TAG,
            "Check finished. OK: {} - Failed: {}",
            report.ok_count(),
            report.failed_count()
        );

        Ok(report)
    }
}

/// Splits pasted text into trimmed, non-empty key lines.
#[must_use]
pub fn parse_key_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

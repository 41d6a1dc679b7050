use std::sync::Arc;

use crate::networking::NetworkProvider;
use crate::output_logger::LogLevel;

pub const DEFAULT_REQUEST_TIMEOUT_S: f64 = 10.0;
pub const MIN_REQUEST_TIMEOUT_S: f64 = 1.0;
pub const MAX_REQUEST_TIMEOUT_S: f64 = 60.0;

#[derive(Clone, Default)]
pub struct KeyprobeOptions {
    /// Base URL the probe endpoint template is built from. Single base, not
    /// multi-provider support.
    pub endpoint_url: Option<String>,
    pub request_timeout_s: Option<f64>,
    pub output_log_level: Option<LogLevel>,
    pub network_provider: Option<Arc<dyn NetworkProvider>>,
}

impl KeyprobeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

pub use check_report::{KeyCheckReport, ResultRow, CSV_HEADER};
pub use key_checker::{CheckOutcome, KeyChecker, DEFAULT_ENDPOINT_URL};
pub use key_masker::mask_key;
pub use keyprobe::{parse_key_lines, Keyprobe};
pub use keyprobe_err::KeyprobeErr;
pub use keyprobe_options::KeyprobeOptions;

pub mod check_report;
pub mod key_checker;
pub mod key_masker;
pub mod keyprobe_options;
pub mod networking;
pub mod output_logger;

mod keyprobe;
mod keyprobe_err;

#[cfg(test)]
mod __tests__;

use serde::Serialize;

use crate::key_checker::CheckOutcome;
use crate::key_masker::mask_key;

pub const CSV_HEADER: &str = "API Key (masked),Works,HTTP Status,Elapsed (s),Detail";

const WORKS_YES: &str = "✅ Yes";
const WORKS_NO: &str = "❌ No";
const STATUS_NOT_AVAILABLE: &str = "N/A";

/// One presentation-ready row per checked key, in input order.
#[derive(Debug, Clone, Serialize)]
pub struct ResultRow {
    pub masked_key: String,
    pub works: String,
    pub http_status: Option<u16>,
    pub elapsed_s: f64,
    pub detail: String,
}

impl ResultRow {
    #[must_use]
    pub fn from_outcome(key: &str, outcome: &CheckOutcome) -> Self {
        ResultRow {
            masked_key: mask_key(key),
            works: if outcome.ok { WORKS_YES } else { WORKS_NO }.to_string(),
            http_status: outcome.status_code,
            elapsed_s: round_to_millis(outcome.elapsed),
            detail: outcome.detail.clone(),
        }
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.works == WORKS_YES
    }

    #[must_use]
    pub fn http_status_display(&self) -> String {
        match self.http_status {
            Some(code) => code.to_string(),
            None => STATUS_NOT_AVAILABLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct KeyCheckReport {
    pub rows: Vec<ResultRow>,
}

impl KeyCheckReport {
    #[must_use]
    pub fn ok_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_ok()).count()
    }

    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.rows.len() - self.ok_count()
    }

    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');

        for row in &self.rows {
            out.push_str(&format!(
                "{},{},{},{:.3},{}\n",
                escape_csv_field(&row.masked_key),
                escape_csv_field(&row.works),
                row.http_status_display(),
                row.elapsed_s,
                escape_csv_field(&row.detail),
            ));
        }

        out
    }
}

fn round_to_millis(elapsed: f64) -> f64 {
    (elapsed * 1000.0).round() / 1000.0
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

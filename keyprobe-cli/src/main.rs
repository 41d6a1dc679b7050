use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use keyprobe_rust::{
    keyprobe_options::{
        KeyprobeOptions, DEFAULT_REQUEST_TIMEOUT_S, MAX_REQUEST_TIMEOUT_S, MIN_REQUEST_TIMEOUT_S,
    },
    output_logger::LogLevel,
    parse_key_lines, KeyCheckReport, Keyprobe, KeyprobeErr, CSV_HEADER,
};

#[derive(Parser)]
#[command(name = "keyprobe")]
#[command(about = "Check which api-tennis.com API keys are still working", long_about = None)]
struct Cli {
    /// File with one API key per line. Reads stdin when omitted.
    keys_file: Option<PathBuf>,

    /// Per-request timeout in seconds (1-60)
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_S)]
    timeout: f64,

    /// Override the endpoint base URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Write the results to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Output machine-readable JSON instead of the table
    #[arg(long)]
    json: bool,

    /// Log level: none, debug, info, warn, error
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("keyprobe: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), KeyprobeErr> {
    if !(MIN_REQUEST_TIMEOUT_S..=MAX_REQUEST_TIMEOUT_S).contains(&cli.timeout) {
        return Err(KeyprobeErr::InvalidTimeout(format!(
            "--timeout must be between {MIN_REQUEST_TIMEOUT_S} and {MAX_REQUEST_TIMEOUT_S} seconds"
        )));
    }

    let text = read_keys_text(cli.keys_file.as_ref())?;
    let keys = parse_key_lines(&text);

    let keyprobe = Keyprobe::new(Some(KeyprobeOptions {
        endpoint_url: cli.endpoint.clone(),
        request_timeout_s: Some(cli.timeout),
        output_log_level: Some(LogLevel::from(cli.log_level.as_str())),
        ..KeyprobeOptions::new()
    }));

    let report = keyprobe.check_keys(&keys).await?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report.rows).unwrap_or_default()
        );
    } else {
        print_table(&report);
    }

    println!(
        "API keys OK: {} · API keys failed: {}",
        report.ok_count(),
        report.failed_count()
    );

    if let Some(path) = &cli.csv {
        fs::write(path, report.to_csv())
            .map_err(|e| KeyprobeErr::FileError(format!("{}: {e}", path.display())))?;
        println!("Results written to {}", path.display());
    }

    Ok(())
}

fn read_keys_text(path: Option<&PathBuf>) -> Result<String, KeyprobeErr> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| KeyprobeErr::FileError(format!("{}: {e}", path.display()))),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| KeyprobeErr::FileError(e.to_string()))?;
            Ok(text)
        }
    }
}

fn print_table(report: &KeyCheckReport) {
    let headers: Vec<&str> = CSV_HEADER.split(',').collect();

    let key_width = report
        .rows
        .iter()
        .map(|row| row.masked_key.chars().count())
        .chain([headers[0].len()])
        .max()
        .unwrap_or(0);

    println!(
        "{:<key_width$}  {:<8}  {:<11}  {:<11}  {}",
        headers[0], headers[1], headers[2], headers[3], headers[4]
    );

    for row in &report.rows {
        println!(
            "{:<key_width$}  {:<8}  {:<11}  {:<11.3}  {}",
            row.masked_key,
            row.works,
            row.http_status_display(),
            row.elapsed_s,
            row.detail
        );
    }
}

use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum KeyprobeErr {
    NoKeysProvided,
    InvalidTimeout(String),
    FileError(String),
}

impl Display for KeyprobeErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyprobeErr::NoKeysProvided => {
                write!(f, "No API keys found. Provide at least one non-empty key")
            }
            KeyprobeErr::InvalidTimeout(msg) => write!(f, "Invalid timeout: {msg}"),
            KeyprobeErr::FileError(msg) => write!(f, "File write error: {msg}"),
        }
    }
}

impl KeyprobeErr {
    pub fn name(&self) -> &'static str {
        match self {
            KeyprobeErr::NoKeysProvided => "NoKeysProvided",
            KeyprobeErr::InvalidTimeout(_) => "InvalidTimeout",
            KeyprobeErr::FileError(_) => "FileError",
        }
    }
}

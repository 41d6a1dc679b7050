pub const VISIBLE_START: usize = 4;
pub const VISIBLE_END: usize = 3;

const MASK_MARKER: &str = "****";

/// Masks an API key for display, e.g. `ABCD****XYZ`.
/// Keys too short for a partial reveal become an all-`*` string of the
/// same length. Counts characters, not bytes.
#[must_use]
pub fn mask_key(key: &str) -> String {
    let key = key.trim();
    let char_count = key.chars().count();
    if char_count <= VISIBLE_START + VISIBLE_END {
        return "*".repeat(char_count);
    }

    let start: String = key.chars().take(VISIBLE_START).collect();
    let end: String = key.chars().skip(char_count - VISIBLE_END).collect();
    format!("{start}{MASK_MARKER}{end}")
}

/// Masks key values following `APIkey=` in arbitrary text.
/// Use this for ANY log output that may include URLs or messages containing
/// API keys.
#[must_use]
pub fn sanitize_api_key(input: &str) -> String {
    input
        .split("APIkey=")
        .enumerate()
        .map(|(i, part)| {
            if i == 0 {
                part.to_string()
            } else {
                let key_len = part
                    .find(|c: char| !(c.is_alphanumeric() || c == '-' || c == '_'))
                    .unwrap_or(part.len());
                let (key, rest) = part.split_at(key_len);
                format!("APIkey={}{}", mask_key(key), rest)
            }
        })
        .collect()
}

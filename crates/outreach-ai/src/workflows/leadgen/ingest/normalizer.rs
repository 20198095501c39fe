/// Strips invisible characters and surrounding whitespace that spreadsheet exports leave behind.
pub(crate) fn normalize_cell(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Emails are compared case-insensitively everywhere downstream.
pub(crate) fn normalize_email(value: &str) -> String {
    normalize_cell(value).replace(' ', "").to_ascii_lowercase()
}

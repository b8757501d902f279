/// Prepare free text for keyword matching: lowercase, then trim.
///
/// Nothing else is rewritten. Keywords match only where they occur
/// verbatim (ignoring case) in what the user typed, however long it is.
pub fn normalize_input(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Strip the line terminator and any trailing whitespace from a raw input line.
pub fn normalize_line(raw: &str) -> &str {
    raw.trim_end_matches(['\n', '\r']).trim_end()
}

/// A line is blank when nothing but whitespace is left after normalizing.
pub fn is_blank(line: &str) -> bool {
    line.trim_start().is_empty()
}

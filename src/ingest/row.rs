use once_cell::sync::Lazy;
use regex::Regex;

/// Longest data line accepted, not counting the line terminator.
pub const MAX_LINE_LEN: usize = 49;

/// `<float>,<rest of line>`. The float may carry leading whitespace, a sign,
/// a fraction and an exponent; the comma has to follow it directly. Anything
/// after the first comma, further commas included, is the room name.
static ROW_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?),(.+)$")
        .expect("row pattern is valid")
});

/// One parsed data line, borrowing the room name from the line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<'a> {
    pub temperature: f32,
    pub room: &'a str,
}

/// Drop the line terminator. The line is cut at the first CR or LF, so a
/// stray CR mid-line ends it there.
pub fn strip_terminator(line: &str) -> &str {
    line.split(['\r', '\n']).next().unwrap_or_default()
}

/// Length of a raw line once its trailing `\n` or `\r\n` is removed.
pub fn content_len(raw: &[u8]) -> usize {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw).len()
}

/// Parse a stripped data line. `None` when the float or a non-empty room
/// name is missing.
pub fn parse_row(line: &str) -> Option<Row<'_>> {
    let caps = ROW_RE.captures(line)?;
    let temperature = caps.get(1)?.as_str().parse::<f32>().ok()?;
    let room = caps.get(2)?.as_str();
    Some(Row { temperature, room })
}

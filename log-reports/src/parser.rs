use std::sync::LazyLock;

use regex::Regex;

use crate::models::ParsedRequest;

// Combined-log line shape: client, two ignored identity fields,
// [timestamp], "METHOD PATH PROTOCOL", status, size, "referrer",
// "user agent". The quoted request must hold exactly three tokens.
static LINE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\S+) \S+ \S+ \[(.*?)\] "(\S+) (\S+) (\S+)" (\d+) \d+ ".*?" ".*?"$"#)
        .expect("valid regex")
});

/// Parses one raw log line. `None` means the line does not match the
/// expected shape and must be skipped, not treated as an error.
pub fn parse(line: &str) -> Option<ParsedRequest> {
    let caps = LINE_SHAPE.captures(line.trim())?;
    let status_code = caps[6].parse().ok()?;
    Some(ParsedRequest {
        client_address: caps[1].to_string(),
        timestamp: caps[2].to_string(),
        method: caps[3].to_string(),
        path: caps[4].to_string(),
        protocol: caps[5].to_string(),
        status_code,
    })
}

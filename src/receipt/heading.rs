//! Store heading lines.
//!
//! The store name argument may span several lines. Each line is trimmed and
//! blank lines are dropped. A leading `CENTER ` marker is accepted and
//! stripped; every heading line is centered anyway.

/// Heading printed when the store name has no visible text.
pub const DEFAULT_HEADING: &str = "Do'kondor POS";

const CENTER_PREFIX: &str = "CENTER ";

/// Split a raw heading into display lines.
pub fn heading_lines(raw: &str) -> Vec<String> {
    let lines: Vec<String> = raw
        .split('\n')
        .filter_map(|line| {
            let mut line = line.trim();
            if let Some(rest) = line.strip_prefix(CENTER_PREFIX) {
                line = rest.trim();
            }
            (!line.is_empty()).then(|| line.to_string())
        })
        .collect();

    if lines.is_empty() {
        vec![DEFAULT_HEADING.to_string()]
    } else {
        lines
    }
}

//! Pre-parse cleanup of model output.

const FENCE: &str = "```";

/// Remove markdown code-fence wrapping from a model reply.
///
/// Returns the body of the first fenced block, without its info string, or
/// the trimmed input when it has no fence. An unterminated fence yields
/// everything after the opening marker.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(open) = trimmed.find(FENCE) else {
        return trimmed;
    };

    let after_open = &trimmed[open + FENCE.len()..];
    let block = match after_open.find(FENCE) {
        Some(close) => &after_open[..close],
        None => after_open,
    };

    strip_info_string(block).trim()
}

/// Drop the text between the opening fence and the payload (`json`,
/// ` json`, `json-ld`, ...).
fn strip_info_string(block: &str) -> &str {
    let starts_payload = |s: &str| s.trim_start().starts_with(['{', '[']);

    match block.find('\n') {
        Some(eol) if !starts_payload(&block[..eol]) => &block[eol + 1..],
        Some(_) => block,
        // Single-line block: the tag runs straight into the payload
        None => match block.find(['{', '[']) {
            Some(start) => &block[start..],
            None => block,
        },
    }
}

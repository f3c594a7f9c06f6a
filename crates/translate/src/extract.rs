//! Pull JavaScript out of a model reply

const FENCE: &str = "```";

/// Return the interior of the first fenced block tagged `javascript` or `js`
/// (case-insensitive), trimmed. Without such a block the whole reply is
/// returned trimmed. Blocks with other tags are skipped.
pub fn extract_code(raw: &str) -> String {
    let mut lines = raw.lines();

    while let Some(line) = lines.next() {
        let Some(tag) = line.trim_start().strip_prefix(FENCE) else {
            continue;
        };
        let tag = tag.split_whitespace().next().unwrap_or("");

        let mut body = Vec::new();
        let mut closed = false;
        for inner in lines.by_ref() {
            if inner.trim_start().starts_with(FENCE) {
                closed = true;
                break;
            }
            body.push(inner);
        }

        if !closed {
            break;
        }
        if is_js_tag(tag) {
            return body.join("\n").trim().to_string();
        }
    }

    raw.trim().to_string()
}

fn is_js_tag(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("javascript") || tag.eq_ignore_ascii_case("js")
}

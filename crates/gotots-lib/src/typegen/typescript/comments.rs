//! Documentation comment formatting.

/// Render documentation text as a `/** ... */` block, every line prefixed
/// with `indent`.
pub fn format_comment(doc: &str, indent: &str) -> String {
    let mut out = format!("{indent}/**\n");
    for line in doc.lines() {
        let line = line.replace("*/", "*\\/");
        if line.is_empty() {
            out.push_str(&format!("{indent} *\n"));
        } else {
            out.push_str(&format!("{indent} * {line}\n"));
        }
    }
    out.push_str(&format!("{indent} */\n"));
    out
}

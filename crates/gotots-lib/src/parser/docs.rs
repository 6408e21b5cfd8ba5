//! Documentation comment grouping and normalization.

use arborium_tree_sitter::Node;

/// Collects comment runs between sibling nodes and hands out the run that
/// documents the next node.
pub(super) struct DocCollector<'s> {
    source: &'s str,
    pending: Vec<&'s str>,
    pending_end_row: usize,
    prev_end_row: Option<usize>,
}

impl<'s> DocCollector<'s> {
    pub(super) fn new(source: &'s str) -> Self {
        Self {
            source,
            pending: Vec::new(),
            pending_end_row: 0,
            prev_end_row: None,
        }
    }

    /// Collector for a list opened by a delimiter on `row`; comments sharing
    /// that row trail the delimiter.
    pub(super) fn after_row(source: &'s str, row: usize) -> Self {
        Self {
            prev_end_row: Some(row),
            ..Self::new(source)
        }
    }

    pub(super) fn push(&mut self, comment: Node<'_>) {
        let start_row = comment.start_position().row;

        // Trailing comment on the line of the previous sibling.
        if self.prev_end_row == Some(start_row) {
            self.pending.clear();
            return;
        }

        // A run continues on the row it ends or the row right after.
        let continues = !self.pending.is_empty()
            && (start_row == self.pending_end_row || start_row == self.pending_end_row + 1);
        if !continues {
            self.pending.clear();
        }
        let source = self.source;
        self.pending.push(&source[comment.byte_range()]);
        self.pending_end_row = comment.end_position().row;
    }

    /// Documentation for `node`, consuming the pending run.
    pub(super) fn take_for(&mut self, node: Node<'_>) -> Option<String> {
        let adjacent =
            !self.pending.is_empty() && self.pending_end_row + 1 == node.start_position().row;
        let doc = if adjacent {
            comment_text(&self.pending)
        } else {
            None
        };

        self.pending.clear();
        self.prev_end_row = Some(node.end_position().row);
        doc
    }
}

/// Text of a comment group with comment markers removed.
///
/// Directive comments (`//go:generate ...`) are dropped, trailing whitespace
/// is stripped, runs of blank lines collapse to one and leading/trailing
/// blank lines are removed. Returns `None` when nothing remains.
pub fn comment_text(comments: &[&str]) -> Option<String> {
    let mut lines: Vec<&str> = Vec::new();

    for comment in comments {
        let body = if let Some(line) = comment.strip_prefix("//") {
            if let Some(rest) = line.strip_prefix(' ') {
                rest
            } else if is_directive(line) {
                continue;
            } else {
                line
            }
        } else if let Some(block) = comment
            .strip_prefix("/*")
            .and_then(|c| c.strip_suffix("*/"))
        {
            block
        } else {
            comment
        };

        lines.extend(body.split('\n').map(|l| l.trim_end()));
    }

    let mut out: Vec<&str> = Vec::with_capacity(lines.len());
    for line in lines {
        let blank = line.is_empty();
        if blank && out.last().is_none_or(|prev| prev.is_empty()) {
            continue;
        }
        out.push(line);
    }
    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }

    if out.is_empty() {
        return None;
    }
    Some(out.join("\n"))
}

/// `//line`, `//extern`, `//export` and `//name:value` style directives.
fn is_directive(text: &str) -> bool {
    if ["line ", "extern ", "export "]
        .iter()
        .any(|prefix| text.starts_with(prefix))
    {
        return true;
    }

    let bytes = text.as_bytes();
    let Some(colon) = text.find(':') else {
        return false;
    };
    if colon == 0 || colon + 1 >= bytes.len() {
        return false;
    }
    bytes[..=colon + 1]
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != colon)
        .all(|(_, &b)| b.is_ascii_lowercase() || b.is_ascii_digit())
}

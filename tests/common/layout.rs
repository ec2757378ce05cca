//! Helpers that inspect formatted text line by line.

/// Column of the `#` of each comment that trails code, per block. Blocks
/// are split at label lines.
pub fn trailing_comment_columns(output: &str, tab_width: usize) -> Vec<Vec<usize>> {
    let mut blocks = vec![Vec::new()];
    for line in output.lines() {
        if is_label(line) {
            blocks.push(Vec::new());
            continue;
        }
        let code = line.trim_start_matches('\t');
        if !line.starts_with('\t') || code.starts_with('#') {
            continue;
        }
        if let Some(column) = line.expand(tab_width).find('#') {
            if let Some(block) = blocks.last_mut() {
                block.push(column);
            }
        }
    }
    blocks
}

pub fn is_label(line: &str) -> bool {
    !line.starts_with('\t') && !line.starts_with('#') && line.ends_with(':')
}

trait ExpandTabs {
    fn expand(&self, tab_width: usize) -> String;
}

impl ExpandTabs for str {
    fn expand(&self, tab_width: usize) -> String {
        let mut expanded = String::new();
        for c in self.chars() {
            if c == '\t' {
                let pad = tab_width - expanded.chars().count() % tab_width;
                expanded.extend(std::iter::repeat_n(' ', pad));
            } else {
                expanded.push(c);
            }
        }
        expanded
    }
}

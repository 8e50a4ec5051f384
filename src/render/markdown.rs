//! Markdown line formatting used by the README and quick-start targets.

use crate::classify::{EXAMPLE_CALL, EXAMPLE_DECL, EXAMPLE_END};
use crate::model::Height;
use crate::render::strip_comment;
use crate::slug;

/// Leading token of a navigation entry, e.g. `// | | # Introduction`.
const NAV_PREFIX: &str = "// | | ";
const FENCE: &str = "```";
const FENCE_OPEN: &str = "```javascript";

/// Navigation entry. `#` becomes a top anchor with an underline row, dashes
/// become bulleted links indented by depth.
pub fn nav_link(line: &str, height: &Height) -> String {
    let rest = line.strip_prefix(NAV_PREFIX).unwrap_or(line);
    let text = after_marker(rest, height);

    let indent = match height.depth() {
        Some(0) => {
            return format!("\n[{}](#{}-1)\n=====\n", text, slug::lower_kebab(text));
        }
        Some(1) => "",
        Some(2) => "  ",
        Some(3) => "   ",
        _ => return String::new(),
    };
    slug::nav_item(indent, text)
}

/// ATX heading wrapped in hashes on both sides, level 2 for `#` down to 5.
pub fn heading(line: &str, height: &Height) -> String {
    let rest = strip_comment(line);
    let text = after_marker(rest, height);

    match height.depth() {
        Some(depth) => {
            let hashes = "#".repeat(depth + 2);
            format!("{} {} {}\n", hashes, text, hashes)
        }
        None => String::new(),
    }
}

pub fn code_block_start(line: &str) -> String {
    format!("{}\n{}\n", FENCE_OPEN, line)
}

pub fn example_line(line: &str) -> String {
    format!("{}\n", uncomment_example(line))
}

/// Last example line: drop the end token, optionally close the fence.
pub fn example_end(line: &str, fence: bool) -> String {
    let text = uncomment_example(line).trim();
    let text = text.strip_suffix(EXAMPLE_END).unwrap_or(text);

    let mut out = format!("{}\n", text);
    if fence {
        out.push_str(FENCE);
        out.push('\n');
    }
    out
}

/// Commented-out calls and declarations become live code in examples.
fn uncomment_example(line: &str) -> &str {
    if line.contains(EXAMPLE_CALL) || line.contains(EXAMPLE_DECL) {
        strip_comment(line)
    } else {
        line
    }
}

/// Text following the first occurrence of the height marker, minus one space.
fn after_marker<'a>(text: &'a str, height: &Height) -> &'a str {
    let rest = if height.is_empty() {
        text
    } else {
        match text.find(height.as_str()) {
            Some(pos) => &text[pos + height.as_str().len()..],
            None => text,
        }
    };
    rest.strip_prefix(' ').unwrap_or(rest)
}

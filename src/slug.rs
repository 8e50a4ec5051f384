//! Markdown anchor slugs for navigation links.

/// Lowercase the text and turn spaces into hyphens. Nothing else is removed,
/// matching the anchors the README headings are linked against.
pub fn lower_kebab(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

/// Bulleted link for a navigation entry, indented by depth.
pub fn nav_item(indent: &str, text: &str) -> String {
    format!("{}* [{}](#{})\n", indent, text, lower_kebab(text))
}

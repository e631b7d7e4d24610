//! Markdown escaping for names coming from reference data and recipes.
//!
//! Category and label names are free text. They may contain characters that
//! break table cells or turn into emphasis, so every name is escaped before
//! it is embedded in a Markdown report.

/// Where an escaped string is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownContext {
    /// Inside a table cell
    Table,
    /// In running text or a heading
    Inline,
}

/// Escape `s` for the given Markdown context.
///
/// ```
/// use green_score::reports::escape::{escape_markdown, MarkdownContext};
///
/// assert_eq!(escape_markdown("Thon | Maquereau", MarkdownContext::Table), "Thon \\| Maquereau");
/// assert_eq!(escape_markdown("*Bio*", MarkdownContext::Inline), "\\*Bio\\*");
/// ```
#[must_use]
pub fn escape_markdown(s: &str, context: MarkdownContext) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match (c, context) {
            ('|' | '`' | '[' | ']', _) => {
                result.push('\\');
                result.push(c);
            }
            ('*' | '_' | '#' | '!' | '~' | '<' | '>', MarkdownContext::Inline) => {
                result.push('\\');
                result.push(c);
            }
            ('\n', _) => result.push(' '),
            ('\r', _) => {}
            _ => result.push(c),
        }
    }
    result
}

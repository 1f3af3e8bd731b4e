//! Table of contents lines.

pub const TOC_HEADING: &str = "Table of contents:";

/// Fewest leader dots between a title and its page number.
pub const MIN_LEADER_DOTS: usize = 2;

/// One section listed in the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: u8,
    pub title: String,
    pub page: usize,
}

/// Formats an entry as `title .... page` filling `width` characters.
///
/// Entries are indented two spaces per level. Titles too long for the line
/// still get [`MIN_LEADER_DOTS`] dots.
pub fn toc_line(entry: &TocEntry, width: usize) -> String {
    let indent = usize::from(entry.level) * 2;
    let page = entry.page.to_string();
    let used = indent + entry.title.chars().count() + page.len() + 2;
    let dots = width.saturating_sub(used).max(MIN_LEADER_DOTS);
    format!(
        "{}{} {} {page}",
        " ".repeat(indent),
        entry.title,
        ".".repeat(dots)
    )
}

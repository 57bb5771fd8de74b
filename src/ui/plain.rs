//! Plain-text rendering for `shelf --print`.

use crate::grouping::FlatItem;

/// Render flattened items as indented text rows.
///
/// Headers are indented two spaces per level; albums sit one level below
/// the innermost header (`depth` is the number of grouping levels).
pub fn plain_rows(items: &[FlatItem], depth: usize) -> Vec<String> {
    items
        .iter()
        .map(|item| match item {
            FlatItem::Header { header, level } => {
                format!("{}{}", "  ".repeat(*level), header)
            }
            FlatItem::Album(album) => {
                let date = album.best_date();
                let mut row = format!("{}{} – {}", "  ".repeat(depth), album.artist, album.name);
                if !date.is_empty() {
                    row.push_str(&format!(" ({})", date));
                }
                row
            }
        })
        .collect()
}

//! Search filtering of the board view

use crate::types::{Column, Task};

/// Columns to show for `query`.
///
/// A column matches if its title, or the content of any of its tasks,
/// contains the query ignoring case. An empty query matches everything.
pub fn filter_columns<'a>(columns: &'a [Column], tasks: &[Task], query: &str) -> Vec<&'a Column> {
    if query.is_empty() {
        return columns.iter().collect();
    }
    let needle = query.to_lowercase();
    columns
        .iter()
        .filter(|column| {
            contains(&column.title, &needle)
                || tasks
                    .iter()
                    .filter(|t| t.column_id == column.id)
                    .any(|t| contains(&t.content, &needle))
        })
        .collect()
}

fn contains(haystack: &str, lowercase_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_needle)
}

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::stash::Stash;

/// A pipe-delimited header row, a separator row of dashes/colons, and one or
/// more contiguous body rows.
static TABLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\|[^\n]+\|\n)(\|[-:\s|]+\|\n)((?:\|[^\n]+\|\n?)+)").expect("table pattern")
});

static CELL_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));

/// Replaces each Markdown table with a placeholder and parks the finished
/// HTML under it until the generic passes are done.
///
/// Runs before the entity escape, so cell content keeps whatever HTML the
/// backend already embedded; only bold markers and protected line breaks are
/// rewritten inside cells.
pub(crate) fn extract_tables(text: &str, br_token: &str, stash: &mut Stash) -> String {
    TABLE
        .replace_all(text, |caps: &Captures| {
            let html = table_html(&caps[1], &caps[3], br_token);
            stash.store(html)
        })
        .into_owned()
}

fn table_html(header: &str, body: &str, br_token: &str) -> String {
    let mut out = String::from(
        "<div class=\"table-wrapper\" style=\"overflow-x: auto; max-width: 100%; margin: 0.75rem 0;\">",
    );
    out.push_str("<table style=\"min-width: 400px;\">");
    out.push_str("<thead><tr>");
    for cell in split_cells(header) {
        out.push_str("<th>");
        out.push_str(&cell_html(cell, br_token));
        out.push_str("</th>");
    }
    out.push_str("</tr></thead>");
    out.push_str("<tbody>");
    for row in body.trim().split('\n') {
        out.push_str("<tr>");
        for cell in split_cells(row) {
            out.push_str("<td>");
            out.push_str(&cell_html(cell, br_token));
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out.push_str("</div>");
    out
}

/// Cells are taken positionally. Blank cells, including the blank edges
/// produced by the leading and trailing pipes, are dropped; column counts
/// are not validated against the header.
fn split_cells(row: &str) -> impl Iterator<Item = &str> {
    row.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
}

fn cell_html(cell: &str, br_token: &str) -> String {
    let restored = cell.replace(br_token, "<br>");
    CELL_BOLD
        .replace_all(&restored, "<strong>$1</strong>")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::split_cells;

    #[test]
    fn edge_pipes_produce_no_cells() {
        let cells: Vec<&str> = split_cells("| Leaf | Green |").collect();
        assert_eq!(cells, vec!["Leaf", "Green"]);
    }

    #[test]
    fn interior_blank_cells_are_dropped() {
        let cells: Vec<&str> = split_cells("| a |  | b |").collect();
        assert_eq!(cells, vec!["a", "b"]);
    }
}

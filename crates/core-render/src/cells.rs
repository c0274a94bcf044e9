//! Display-cell measurement over grapheme clusters.
//!
//! Invariants:
//! - Truncation never splits a cluster; a wide cluster that would straddle the
//!   right edge is dropped whole.
//! - Control characters (tab, carriage return, ...) draw as a single space so
//!   the terminal never interprets them.
//! - Cursor columns arrive in char units; a column inside a cluster maps to
//!   the cluster's first cell.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

fn is_control_cluster(g: &str) -> bool {
    g.chars().next().is_some_and(char::is_control)
}

/// Cells a cluster occupies once drawn.
fn cluster_width(g: &str) -> usize {
    if is_control_cluster(g) { 1 } else { g.width() }
}

fn cluster_display(g: &str) -> &str {
    if is_control_cluster(g) { " " } else { g }
}

/// Sanitize `line` for display and cut it to at most `cols` cells.
pub fn truncate_to_width(line: &str, cols: usize) -> String {
    let mut out = String::with_capacity(line.len().min(cols.saturating_mul(4)));
    let mut used = 0;
    for g in line.graphemes(true) {
        let w = cluster_width(g);
        if used + w > cols {
            break;
        }
        used += w;
        out.push_str(cluster_display(g));
    }
    out
}

/// Display width of `line` as it would be drawn.
pub fn display_width(line: &str) -> usize {
    line.graphemes(true).map(cluster_width).sum()
}

/// Map a char-unit column on `line` to the terminal cell the cursor occupies.
pub fn cursor_cell(line: &str, col: usize) -> usize {
    let mut chars = 0;
    let mut cells = 0;
    for g in line.graphemes(true) {
        let n = g.chars().count();
        if chars + n > col {
            break;
        }
        chars += n;
        cells += cluster_width(g);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_truncation() {
        assert_eq!(truncate_to_width("hello world", 5), "hello");
        assert_eq!(truncate_to_width("hi", 5), "hi");
        assert_eq!(truncate_to_width("hi", 0), "");
    }

    #[test]
    fn wide_cluster_not_split_at_edge() {
        // Each CJK char is two cells wide.
        let s = "a\u{6F22}\u{5B57}";
        assert_eq!(display_width(s), 5);
        assert_eq!(truncate_to_width(s, 4), "a\u{6F22}");
        assert_eq!(truncate_to_width(s, 2), "a");
    }

    #[test]
    fn combining_sequence_kept_whole() {
        let s = "e\u{301}x";
        assert_eq!(display_width(s), 2);
        assert_eq!(truncate_to_width(s, 1), "e\u{301}");
    }

    #[test]
    fn control_chars_draw_as_space() {
        assert_eq!(truncate_to_width("a\tb\r", 10), "a b ");
        assert_eq!(display_width("\t"), 1);
    }

    #[test]
    fn cursor_cell_accounts_for_width() {
        let s = "a\u{6F22}b";
        assert_eq!(cursor_cell(s, 0), 0);
        assert_eq!(cursor_cell(s, 1), 1);
        assert_eq!(cursor_cell(s, 2), 3);
        assert_eq!(cursor_cell(s, 3), 4);
        // past the end lands after the last cell
        assert_eq!(cursor_cell(s, 10), 4);
    }

    #[test]
    fn cursor_inside_cluster_maps_to_cluster_start() {
        let s = "xe\u{301}y";
        assert_eq!(cursor_cell(s, 1), 1);
        assert_eq!(cursor_cell(s, 2), 1);
        assert_eq!(cursor_cell(s, 3), 2);
    }
}

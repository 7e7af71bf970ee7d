//! Column width computation and cell formatting for tabular output.
//!
//! Pure functions: content widths in, rendered widths out. The table is
//! scaled to the terminal by a single multiplier capped at
//! [`MAX_WIDTH_MULTIPLIER`], so columns stretch proportionally on wide
//! terminals without becoming absurd, and shrink proportionally when the
//! content does not fit.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Spaces reserved inside every cell (split between left and right).
pub const CELL_PADDING: usize = 2;
/// Character drawn between columns.
pub const COLUMN_DIVIDER: &str = "|";
/// Character used for the header separator row.
pub const ROW_DIVIDER: &str = "-";
/// Appended to truncated cell content.
pub const TRUNCATION_MARKER: char = '…';
/// Columns never stretch beyond this multiple of their natural width.
pub const MAX_WIDTH_MULTIPLIER: f64 = 1.2;

/// Natural column widths: for each column the widest of the header and every
/// visible cell, plus fixed padding. Returns the per-column widths and their
/// sum.
pub fn natural_widths(headers: &[String], rows: &[Vec<String>]) -> (Vec<usize>, usize) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width() + CELL_PADDING).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            let w = cell.width() + CELL_PADDING;
            if w > widths[i] {
                widths[i] = w;
            }
        }
    }
    let total = widths.iter().sum();
    (widths, total)
}

/// Scale natural widths to the terminal. `terminal_width` is the full
/// terminal width; divider characters between columns are subtracted before
/// computing the adjustment multiplier.
pub fn column_widths(natural: &[usize], natural_total: usize, terminal_width: usize) -> Vec<usize> {
    if natural.is_empty() || natural_total == 0 {
        return Vec::new();
    }
    let divider_count = (natural.len() - 1) * COLUMN_DIVIDER.width();
    let available = terminal_width.saturating_sub(divider_count);

    let adjustment = (available as f64 / natural_total as f64).min(MAX_WIDTH_MULTIPLIER);
    natural
        .iter()
        .map(|w| (*w as f64 * adjustment) as usize)
        .collect()
}

/// Format one cell: truncate to the content width (marking truncation with
/// `…`), left-pad by half the cell padding, then right-pad to exactly
/// `cell_width`.
pub fn format_cell(raw: &str, cell_width: usize) -> String {
    let content_width = cell_width.saturating_sub(CELL_PADDING);
    let content = truncate(raw, content_width);
    let padded = format!("{}{}", " ".repeat(CELL_PADDING / 2), content);
    let fill = cell_width.saturating_sub(padded.width());
    format!("{}{}", padded, " ".repeat(fill))
}

/// Truncate `s` to at most `max_width` display columns, replacing the tail
/// with the truncation marker when anything is cut.
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let marker_width = TRUNCATION_MARKER.width().unwrap_or(1);
    let budget = max_width.saturating_sub(marker_width);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(TRUNCATION_MARKER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn natural_width_is_widest_cell_plus_padding() {
        let headers = strings(&["Name", "City"]);
        let rows = vec![
            strings(&["Acme Industries", "NY"]),
            strings(&["Bo", "Copenhagen"]),
        ];
        let (widths, total) = natural_widths(&headers, &rows);
        assert_eq!(widths, vec![15 + CELL_PADDING, 10 + CELL_PADDING]);
        assert_eq!(total, widths.iter().sum::<usize>());
    }

    #[test]
    fn header_wins_when_wider_than_cells() {
        let headers = strings(&["Identifier"]);
        let rows = vec![strings(&["ab"])];
        let (widths, _) = natural_widths(&headers, &rows);
        assert_eq!(widths, vec![10 + CELL_PADDING]);
    }

    #[test]
    fn widths_shrink_proportionally_when_content_overflows() {
        let natural = vec![40, 60];
        let widths = column_widths(&natural, 100, 51);
        // available = 51 - 1 divider = 50, adjustment = 0.5
        assert_eq!(widths, vec![20, 30]);
    }

    #[test]
    fn stretch_is_capped_at_max_multiplier() {
        let natural = vec![10, 10];
        let widths = column_widths(&natural, 20, 500);
        assert_eq!(widths, vec![12, 12]);
    }

    #[test]
    fn widths_never_exceed_available_space() {
        for terminal_width in [20usize, 40, 80, 120, 300] {
            let natural = vec![14, 22, 9];
            let total = 45;
            let widths = column_widths(&natural, total, terminal_width);
            let dividers = natural.len() - 1;
            let sum: usize = widths.iter().sum();
            assert!(
                sum <= terminal_width - dividers,
                "sum {sum} exceeds terminal {terminal_width}"
            );
            // The 1.2 cap bounds every column individually.
            for (w, n) in widths.iter().zip(&natural) {
                assert!(*w as f64 <= *n as f64 * MAX_WIDTH_MULTIPLIER);
            }
        }
    }

    #[test]
    fn format_cell_pads_to_exact_width() {
        let cell = format_cell("abc", 10);
        assert_eq!(cell.len(), 10);
        assert_eq!(cell, " abc      ");
    }

    #[test]
    fn format_cell_truncates_with_marker() {
        let cell = format_cell("abcdefghij", 8);
        // content width 6: five chars plus the marker, then padding
        assert_eq!(cell, " abcde… ");
        assert_eq!(cell.chars().count(), 8);
    }

    #[test]
    fn format_cell_leaves_exact_fit_untouched() {
        let cell = format_cell("abcdef", 8);
        assert_eq!(cell, " abcdef ");
    }
}

//! Search bar component renderer.
//!
//! The search box is always drawn. While it has focus its border takes the
//! `search_bar_border` color and a block cursor follows the query; otherwise
//! it is drawn with the plain border color and shows a placeholder when the
//! filter is empty.

use crate::ui::helpers::{pad_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

const PLACEHOLDER: &str = "Search by name...";

/// Renders the 3-line search box at `row` and returns `row + 3`.
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Search: query█   │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if search.is_active {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    if search.query.is_empty() && !search.is_active {
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", pad_right(&format!(" {PLACEHOLDER}"), inner_width));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", pad_right(&search_line(search, inner_width), inner_width));
    }
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Text inside the box: label, query, and cursor when active.
///
/// Long queries keep their tail visible so the cursor stays on screen.
fn search_line(search: &SearchBarInfo, width: usize) -> String {
    let label = " Search: ";
    let cursor = if search.is_active { "█" } else { "" };
    let room = width
        .saturating_sub(label.chars().count())
        .saturating_sub(cursor.chars().count());

    let query_len = search.query.chars().count();
    let visible: String = search.query.chars().skip(query_len.saturating_sub(room)).collect();
    format!("{label}{visible}{cursor}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_query_keeps_its_tail() {
        let search = SearchBarInfo {
            query: "macbook air m3".to_string(),
            is_active: true,
        };
        assert_eq!(search_line(&search, 16), " Search: air m3█");
    }

    #[test]
    fn inactive_query_has_no_cursor() {
        let search = SearchBarInfo {
            query: "dell".to_string(),
            is_active: false,
        };
        assert_eq!(search_line(&search, 40), " Search: dell");
    }
}

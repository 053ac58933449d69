//! Empty state component renderer.
//!
//! Shown in place of table rows when the filtered view is empty, either
//! because the catalog has no products or because nothing matches the
//! current search.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

use super::centered_padding;

/// Renders the two-line empty state message starting at `row`.
///
/// The message uses `empty_state_fg`; the subtitle is dimmed. Returns the
/// next available row.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let (left, right) = centered_padding(&empty.message, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(left));
    print!("{}", empty.message);
    print!("{}", " ".repeat(right));
    print!("{}", Theme::reset());

    let (left, right) = centered_padding(&empty.subtitle, cols);

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(left));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(right));
    print!("{}", Theme::reset());

    row + 2
}

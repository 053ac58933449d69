//! Footer component renderer.
//!
//! Renders the keybinding hints for the current input mode, centered and
//! dimmed. Hints wider than the pane are cut rather than wrapped.

use crate::ui::helpers::{pad_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

use super::centered_padding;

/// Renders the footer help bar at `row` and returns the next row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = pad_right(&footer.keybindings, footer.keybindings.chars().count().min(cols));
    let (left, right) = centered_padding(&help_text, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(left));
    print!("{help_text}");
    print!("{}", " ".repeat(right));
    print!("{}", Theme::reset());
    row + 1
}

//! Delete confirmation prompt.

use crate::ui::helpers::{pad_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ConfirmDialog;

use super::centered_padding;

/// Renders a 4-line box centered horizontally, starting at `row`.
pub fn render_confirm_dialog(row: usize, dialog: &ConfirmDialog, theme: &Theme, cols: usize) -> usize {
    let content = dialog.message.chars().count().max(dialog.hint.chars().count());
    let inner = (content + 4).min(cols.saturating_sub(2));
    let col = cols.saturating_sub(inner + 2) / 2 + 1;
    let border = Theme::fg(&theme.colors.error_fg);

    position_cursor(row, col);
    print!("{border}┌{}┐{}", "─".repeat(inner), Theme::reset());

    let lines = [
        (&dialog.message, Theme::fg(&theme.colors.text_normal), true),
        (&dialog.hint, Theme::fg(&theme.colors.text_dim), false),
    ];
    for (offset, (text, color, bold)) in lines.into_iter().enumerate() {
        let (left, _) = centered_padding(text, inner);
        position_cursor(row + 1 + offset, col);
        print!("{border}│{}{color}", Theme::reset());
        if bold {
            print!("{}", Theme::bold());
        }
        print!("{}", pad_right(&format!("{}{text}", " ".repeat(left)), inner));
        print!("{}{border}│{}", Theme::reset(), Theme::reset());
    }

    position_cursor(row + 3, col);
    print!("{border}└{}┘{}", "─".repeat(inner), Theme::reset());
    row + 4
}

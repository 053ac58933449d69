//! Transient notification banner on the top line.

use crate::app::NotificationKind;
use crate::ui::helpers::{pad_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NotificationBanner;

/// Renders the banner on `row`, or blanks the line when there is none.
pub fn render_notification(
    row: usize,
    banner: Option<&NotificationBanner>,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    let Some(banner) = banner else {
        print!("{}", " ".repeat(cols));
        return row + 1;
    };

    let (icon, color) = match banner.kind {
        NotificationKind::Success => ("✓", &theme.colors.success_fg),
        NotificationKind::Error => ("✗", &theme.colors.error_fg),
    };

    print!("{}{}", Theme::bold(), Theme::fg(color));
    print!("{}", pad_right(&format!(" {icon} {}", banner.message), cols));
    print!("{}", Theme::reset());
    row + 1
}

//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready strings only (formatted prices, row
//! positions, highlight ranges), so components never touch the store.

use crate::app::NotificationKind;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Search box; always drawn, highlighted while typing.
    pub search_bar: SearchBarInfo,

    /// Rows of the current page.
    pub rows: Vec<DisplayRow>,

    /// Page position below the table.
    pub pagination: PaginationInfo,

    /// Shown in the table body when there are no rows.
    pub empty_state: Option<EmptyState>,

    /// Create-product side panel, when open.
    pub form: Option<FormPanel>,

    /// Delete confirmation prompt, when pending.
    pub confirm: Option<ConfirmDialog>,

    /// Transient banner on the top line.
    pub notification: Option<NotificationBanner>,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// 1-based position within the current page.
    pub position: usize,

    /// Product name, possibly truncated.
    pub name: String,

    /// Price with grouped digits.
    pub price: String,

    /// Quantity in stock.
    pub quantity: String,

    /// Whether the cursor is on this row.
    pub is_selected: bool,

    /// Character ranges of `name` matching the search filter.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Search box display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current filter text.
    pub query: String,

    /// Whether keystrokes currently go to the search box.
    pub is_active: bool,
}

/// Pagination summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationInfo {
    /// 1-based current page (1 when empty).
    pub page: usize,

    /// Number of pages (at least 1).
    pub page_count: usize,

    /// Number of filtered products.
    pub total: usize,
}

/// Empty table message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Create-product side panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPanel {
    pub title: String,
    pub fields: Vec<FormFieldView>,
}

/// One labelled input in the form panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub label: String,
    pub value: String,
    pub is_focused: bool,
    pub error: Option<String>,
}

/// Delete confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    pub message: String,
    pub hint: String,
}

/// Notification banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationBanner {
    pub kind: NotificationKind,
    pub message: String,
}

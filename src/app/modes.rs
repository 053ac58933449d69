//! Input mode state machine for the catalog pane.
//!
//! The mode decides how key presses are interpreted and which overlays the
//! renderer draws (search cursor, create-form panel, delete confirmation).
//!
//! ```text
//!            /                 a
//!  Search <───── Normal ─────────> Form(field)
//!    │ Enter/Esc  ▲  │ d             │ Enter (valid) / Esc
//!    └────────────┘  ▼               │
//!           ConfirmDelete(id) ───────┘ y / n
//! ```

use crate::domain::ProductId;

/// Field of the create form that currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Price,
    Quantity,
}

impl FormField {
    /// All fields in tab order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Price, Self::Quantity];

    /// Next field in tab order, wrapping to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Price,
            Self::Price => Self::Quantity,
            Self::Quantity => Self::Name,
        }
    }

    /// Previous field in tab order, wrapping to the last.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Quantity,
            Self::Price => Self::Name,
            Self::Quantity => Self::Price,
        }
    }

    /// Label shown next to the field in the form panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Product name",
            Self::Price => "Price (VND)",
            Self::Quantity => "Quantity",
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Table navigation and commands.
    ///
    /// Keybindings: j/k (move), h/l (page), / (search), a (add),
    /// d (delete), Esc (dismiss notification), q (quit).
    Normal,

    /// Typing into the search box. Every keystroke updates the filter.
    Search,

    /// Create form panel is open with the given field focused.
    Form(FormField),

    /// Waiting for the user to confirm deleting the given product.
    ConfirmDelete(ProductId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_cycle_wraps_both_ways() {
        for field in FormField::ALL {
            assert_eq!(field.next().prev(), field);
        }
        assert_eq!(FormField::Quantity.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Quantity);
    }
}

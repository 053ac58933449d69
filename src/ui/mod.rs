//! User interface rendering layer with component-based architecture.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready view model types
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: composable UI component renderers
//! - [`helpers`]: highlighting, digit grouping, column sizing
//! - [`theme`]: color schemes and ANSI escape sequences
//!
//! # Example
//!
//! ```no_run
//! use catalog_admin::app::AppState;
//! use catalog_admin::store::InMemoryStore;
//! use catalog_admin::ui::{render, Theme};
//!
//! let mut state = AppState::new(Box::new(InMemoryStore::seeded()), Theme::default());
//! state.refresh();
//! render(&state, 24, 100);
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ConfirmDialog, DisplayRow, EmptyState, FooterInfo, FormFieldView, FormPanel, HeaderInfo,
    NotificationBanner, PaginationInfo, SearchBarInfo, UIViewModel,
};

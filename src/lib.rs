//! Catalog Admin: a Zellij plugin for administering a product catalog.
//!
//! The plugin keeps an in-memory list of products and offers:
//! - a paginated table with live, case-insensitive name search
//! - a side-panel form for adding products, with inline validation
//! - deletion with an explicit confirmation step
//! - transient success/error notifications
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, form validation, notifications   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────────┐   ┌─────────────────────────┐
//! │ UI Layer (ui/)        │   │ Store Layer (store/)    │
//! │ - Rendering, theming  │   │ - ProductStore trait    │
//! │ - Components          │   │ - In-memory catalog     │
//! └───────────────────────┘   └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) · Infrastructure · Observability  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/catalog-admin.wasm" {
//!         page_size "5"
//!         notification_secs "3"
//!         seed "true"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use catalog_admin::{handle_event, initialize, Config, Event};
//!
//! let mut map = BTreeMap::new();
//! map.insert("page_size".to_string(), "2".to_string());
//!
//! let mut state = initialize(&Config::from_zellij(&map));
//! let (should_render, _) = handle_event(&mut state, &Event::NextPage);
//! assert!(should_render);
//! assert_eq!(state.selected_index, 2);
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{CatalogError, NewProduct, Product, ProductId, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::str::FromStr;

use app::state::{DEFAULT_NOTIFICATION_SECS, DEFAULT_PAGE_SIZE};
use store::{InMemoryStore, ProductStore};

/// Plugin configuration parsed from Zellij's configuration map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Table rows per page. Default: 5
    pub page_size: usize,

    /// Seconds a notification stays on screen. Default: 3
    pub notification_secs: u32,

    /// Whether to start with the sample catalog. Default: `true`
    pub seed: bool,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` expands to `/host`.
    pub theme_file: Option<String>,

    /// Tracing filter directive (`trace`, `debug`, `info`, ...). Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            notification_secs: DEFAULT_NOTIFICATION_SECS,
            seed: true,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Values that fail to parse are logged and
    /// replaced with their defaults.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let page_size = positive_setting::<usize>(config, "page_size").unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default page_size");
            None
        });
        let notification_secs = positive_setting::<u32>(config, "notification_secs").unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default notification_secs");
            None
        });

        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            page_size: page_size.unwrap_or(defaults.page_size),
            notification_secs: notification_secs.unwrap_or(defaults.notification_secs),
            seed: config
                .get("seed")
                .map_or(defaults.seed, |v| !v.trim().eq_ignore_ascii_case("false")),
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
        }
    }
}

/// Reads `key` as a number greater than zero. Missing keys give `Ok(None)`.
fn positive_setting<T>(config: &BTreeMap<String, String>, key: &str) -> Result<Option<T>>
where
    T: FromStr + PartialOrd + Default,
{
    let Some(raw) = config.get(key) else {
        return Ok(None);
    };

    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(Some(value)),
        _ => Err(CatalogError::Config(format!(
            "{key} must be a whole number greater than 0, got {raw:?}"
        ))),
    }
}

/// Builds the initial application state from configuration.
///
/// Loads the theme (file, then name, then default), creates the store, and
/// performs the first [`AppState::refresh`].
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(?config, "initializing catalog admin plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let store: Box<dyn ProductStore> = if config.seed {
        Box::new(InMemoryStore::seeded())
    } else {
        Box::<InMemoryStore>::default()
    };

    let mut state = AppState::new(store, theme);
    state.page_size = config.page_size;
    state.notification_secs = config.notification_secs;
    state.refresh();
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn parses_every_key() {
        let config = Config::from_zellij(&map(&[
            ("page_size", "10"),
            ("notification_secs", " 5 "),
            ("seed", "false"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/my-theme.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(
            config,
            Config {
                page_size: 10,
                notification_secs: 5,
                seed: false,
                theme_name: Some("catppuccin-latte".to_string()),
                theme_file: Some("~/my-theme.toml".to_string()),
                trace_level: Some("debug".to_string()),
            }
        );
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("page_size", "0"),
            ("notification_secs", "soon"),
            ("theme", "  "),
        ]));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.notification_secs, DEFAULT_NOTIFICATION_SECS);
        assert_eq!(config.theme_name, None);
    }

    #[test]
    fn positive_setting_reports_config_error() {
        let err = positive_setting::<usize>(&map(&[("page_size", "-1")]), "page_size").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn initialize_applies_config() {
        let state = initialize(&Config {
            page_size: 2,
            notification_secs: 7,
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        });

        assert_eq!(state.filtered_products.len(), 5);
        assert_eq!(state.page_count(), 3);
        assert_eq!(state.notification_secs, 7);
        assert_eq!(state.theme.name, "catppuccin-frappe");
    }

    #[test]
    fn initialize_without_seed_starts_empty() {
        let state = initialize(&Config {
            seed: false,
            theme_file: Some("/nonexistent/theme.toml".to_string()),
            ..Config::default()
        });

        assert!(state.store.products().is_empty());
        assert_eq!(state.theme, Theme::default());
    }
}

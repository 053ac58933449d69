//! Zellij plugin wrapper and entry point.
//!
//! The thin integration layer between the catalog library and Zellij. It
//! maps Zellij keys and timers to library [`Event`]s, runs the returned
//! [`Action`]s against the host API, and forwards rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: `Key`, `Timer`, `PermissionRequestResult`
//! 3. **Update**: map the event, delegate to `handle_event`, run actions
//! 4. **Render**: call the library render function
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: move down / up
//!
//! Normal mode:
//! - `j`/`Down`, `k`/`Up`: move
//! - `l`/`Right`/`PageDown`, `h`/`Left`/`PageUp`: next / previous page
//! - `/`: search, `a`: add product, `d`: delete selected
//! - `Esc`: dismiss notification, `q`: close plugin
//!
//! Search mode: type to filter, `Enter` keeps the filter, `Esc` clears it.
//!
//! Form: `Tab`/`Down` next field, `Shift+Tab`/`Up` previous field,
//! `Enter` save, `Esc` cancel.
//!
//! Delete prompt: `y`/`Enter` delete, `n`/`Esc` cancel.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use catalog_admin::app::notification::now_ms;
use catalog_admin::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: catalog_admin::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: catalog_admin::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        catalog_admin::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(?config, "parsed configuration");
        self.app = catalog_admin::initialize(&config);

        request_permission(&[PermissionType::ChangeApplicationState]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!(
            products = self.app.store.products().len(),
            "plugin load complete"
        );
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Tick { now_ms: now_ms() },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                match status {
                    PermissionStatus::Granted => tracing::debug!("permissions granted"),
                    PermissionStatus::Denied => {
                        tracing::warn!("permissions denied - the plugin cannot hide itself");
                    }
                }
                return false;
            }
            _ => return false,
        };

        let (should_render, actions) = handle_event(&mut self.app, &our_event);
        tracing::debug!(
            action_count = actions.len(),
            should_render,
            "event handled"
        );
        for action in &actions {
            Self::execute_action(action);
        }
        should_render
    }

    fn render(&mut self, rows: usize, cols: usize) {
        catalog_admin::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Normal => Self::map_normal_key(key),
            InputMode::Search => Self::map_text_key(key),
            InputMode::Form(_) => match key.bare_key {
                BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Some(Event::PrevField),
                BareKey::Tab => Some(Event::NextField),
                _ => Self::map_text_key(key),
            },
            InputMode::ConfirmDelete(_) => match key.bare_key {
                BareKey::Char('y' | 'Y') | BareKey::Enter => Some(Event::Confirm),
                BareKey::Char('n' | 'N') | BareKey::Esc => Some(Event::Cancel),
                _ => None,
            },
        }
    }

    fn map_normal_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') => Event::KeyUp,
            BareKey::Right | BareKey::PageDown | BareKey::Char('l') => Event::NextPage,
            BareKey::Left | BareKey::PageUp | BareKey::Char('h') => Event::PrevPage,
            BareKey::Char('/') => Event::SearchMode,
            BareKey::Char('a') => Event::OpenForm,
            BareKey::Char('d') => Event::RequestDelete,
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Esc => Event::Cancel,
            _ => return None,
        })
    }

    /// Keys for modes that edit text: every printable character is input.
    fn map_text_key(key: &KeyWithModifier) -> Option<Event> {
        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Enter => Event::Confirm,
            BareKey::Esc => Event::Cancel,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleTimer { seconds } => {
                tracing::debug!(seconds, "scheduling notification timer");
                set_timeout(*seconds);
            }
        }
    }
}

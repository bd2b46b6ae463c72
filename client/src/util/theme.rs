//! Theme persistence, document binding, and the `use_theme` accessor.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Every store change updates
//! that attribute; explicit choices are also written back to `localStorage`.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op and render the default theme, and the stored preference is loaded
//! once hydration has finished.

use std::sync::Arc;

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemeStore};

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "propulse_theme";

/// Read the theme preference from localStorage.
///
/// Falls back to the system `prefers-color-scheme` when nothing is stored.
pub fn read_preference() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::default();
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                if let Ok(theme) = val.parse::<Theme>() {
                    return theme;
                }
            }
        }

        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::default()
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Persist the theme to localStorage.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

// =============================================================================
// CONTEXT
// =============================================================================

type PersistFn = Arc<dyn Fn(Theme) + Send + Sync>;

/// What components get from [`use_theme`]: the store plus a signal mirror
/// so reads inside views are reactive.
///
/// Only explicit choices (`set`, `toggle`) are written to localStorage; the
/// preference loaded at startup is not.
#[derive(Clone)]
pub struct ThemeContext {
    store: ThemeStore,
    current: RwSignal<Theme>,
    persist: PersistFn,
}

impl ThemeContext {
    fn new(store: ThemeStore) -> Self {
        Self::with_persist(store, Arc::new(persist))
    }

    fn with_persist(store: ThemeStore, persist: PersistFn) -> Self {
        let current = RwSignal::new(store.read());
        store.subscribe(move |theme| {
            current.set(theme);
            apply(theme);
        });
        Self { store, current, persist }
    }

    /// Current theme; tracked when called inside a reactive scope.
    pub fn read(&self) -> Theme {
        self.current.get()
    }

    /// Copyable reactive handle on the current theme.
    pub fn signal(&self) -> ReadSignal<Theme> {
        self.current.read_only()
    }

    pub fn set(&self, theme: Theme) {
        self.store.set(theme);
        (self.persist)(theme);
    }

    pub fn toggle(&self) -> Theme {
        let theme = self.store.toggle();
        (self.persist)(theme);
        theme
    }

    /// Adopt the startup preference without recording it as a choice.
    fn load(&self, theme: Theme) {
        apply(theme);
        self.store.set(theme);
    }
}

/// Create the session's theme store and inject it into context.
///
/// Call once, from the root component.
pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext::new(ThemeStore::default());

    // Effects only run in the browser, after hydration.
    let loader = ctx.clone();
    Effect::new(move || loader.load(read_preference()));

    provide_context(ctx.clone());
    ctx
}

/// Access the theme injected by [`provide_theme`].
///
/// # Panics
///
/// Panics when called outside the component tree rooted at `App`.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
#[path = "theme_test.rs"]
mod tests;

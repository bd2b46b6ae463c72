//! Theme state: the current light/dark mode and its subscribers.
//!
//! DESIGN
//! ======
//! `ThemeStore` is a plain observable value with no Leptos or browser
//! dependency. It is created once by the root component and injected through
//! context (see `util::theme`); components never reach for ambient globals.
//! Listeners run outside the lock, so a listener may read the store.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::sync::{Arc, PoisonError, RwLock};

/// Visual mode applied to the whole document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("Invalid theme: {s}")),
        }
    }
}

type Listener = Arc<dyn Fn(Theme) + Send + Sync>;

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subscription(u64);

struct Inner {
    theme: Theme,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Shared, injectable theme holder. Cloning shares the same state.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<RwLock<Inner>>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore").field("theme", &self.read()).finish_non_exhaustive()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeStore {
    #[must_use]
    pub fn new(initial: Theme) -> Self {
        Self { inner: Arc::new(RwLock::new(Inner { theme: initial, next_id: 0, listeners: Vec::new() })) }
    }

    /// Current theme.
    #[must_use]
    pub fn read(&self) -> Theme {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).theme
    }

    /// Replace the theme. Subscribers hear about it only if it changed.
    pub fn set(&self, theme: Theme) {
        let listeners = {
            let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
            if inner.theme == theme {
                return;
            }
            inner.theme = theme;
            snapshot(&inner)
        };
        notify(&listeners, theme);
    }

    /// Flip between light and dark; returns the new theme.
    pub fn toggle(&self) -> Theme {
        let (next, listeners) = {
            let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
            inner.theme = inner.theme.toggled();
            (inner.theme, snapshot(&inner))
        };
        notify(&listeners, next);
        next
    }

    /// Register a listener called with the new theme after every change.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Theme) + Send + Sync + 'static,
    {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        Subscription(id)
    }

    /// Remove a listener. Unknown subscriptions are ignored.
    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.listeners.retain(|(id, _)| *id != subscription.0);
    }
}

fn snapshot(inner: &Inner) -> Vec<Listener> {
    inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
}

fn notify(listeners: &[Listener], theme: Theme) {
    for listener in listeners {
        listener(theme);
    }
}

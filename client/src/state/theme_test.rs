use super::*;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

fn recorder(store: &ThemeStore) -> (Arc<Mutex<Vec<Theme>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let sub = store.subscribe(move |theme| sink.lock().unwrap().push(theme));
    (seen, sub)
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_parses_canonical_strings() {
    assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
    assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
    assert!("Dark".parse::<Theme>().is_err());
    assert_eq!(Theme::Dark.as_str(), "dark");
}

// =============================================================
// ThemeStore
// =============================================================

#[test]
fn read_returns_initial_theme() {
    assert_eq!(ThemeStore::new(Theme::Dark).read(), Theme::Dark);
    assert_eq!(ThemeStore::default().read(), Theme::Light);
}

#[test]
fn toggle_twice_restores_original_theme() {
    for initial in [Theme::Light, Theme::Dark] {
        let store = ThemeStore::new(initial);
        assert_eq!(store.toggle(), initial.toggled());
        assert_eq!(store.toggle(), initial);
        assert_eq!(store.read(), initial);
    }
}

#[test]
fn set_replaces_theme_and_is_visible_to_clones() {
    let store = ThemeStore::new(Theme::Light);
    let other = store.clone();
    store.set(Theme::Dark);
    assert_eq!(other.read(), Theme::Dark);
}

#[test]
fn set_notifies_only_on_change() {
    let store = ThemeStore::new(Theme::Light);
    let (seen, _sub) = recorder(&store);
    store.set(Theme::Light);
    store.set(Theme::Dark);
    store.set(Theme::Dark);
    assert_eq!(*seen.lock().unwrap(), vec![Theme::Dark]);
}

#[test]
fn toggle_notifies_every_subscriber() {
    let store = ThemeStore::new(Theme::Light);
    let (first, _a) = recorder(&store);
    let (second, _b) = recorder(&store);
    store.toggle();
    store.toggle();
    assert_eq!(*first.lock().unwrap(), vec![Theme::Dark, Theme::Light]);
    assert_eq!(*second.lock().unwrap(), vec![Theme::Dark, Theme::Light]);
}

#[test]
fn unsubscribed_listener_is_silent() {
    let store = ThemeStore::new(Theme::Light);
    let (seen, sub) = recorder(&store);
    store.unsubscribe(sub);
    store.toggle();
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn listener_can_read_store_without_deadlock() {
    let store = ThemeStore::new(Theme::Light);
    let reads = Arc::new(AtomicUsize::new(0));
    let observed = store.clone();
    let counter = Arc::clone(&reads);
    store.subscribe(move |theme| {
        assert_eq!(observed.read(), theme);
        counter.fetch_add(1, Ordering::SeqCst);
    });
    store.toggle();
    assert_eq!(reads.load(Ordering::SeqCst), 1);
}

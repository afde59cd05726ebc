use crate::storage::KeyValueStore;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChange {
    Changed(Theme),
    Unchanged,
}

/// Light/dark flag backed by a key-value store.
#[derive(Debug, Clone)]
pub struct ThemeStore<S> {
    storage: S,
    theme: Theme,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Starts at the default theme without touching storage; call
    /// [`ThemeStore::hydrate`] once storage is reachable.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            theme: Theme::default(),
        }
    }

    pub fn load(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.hydrate();
        store
    }

    /// Reads the persisted token. Missing or unrecognized tokens leave the
    /// default in place.
    pub fn hydrate(&mut self) -> ThemeChange {
        let persisted = match self.storage.get(THEME_KEY) {
            Ok(token) => token,
            Err(e) => {
                log::warn!("couldn't read theme: {e}");
                None
            }
        };
        let theme = persisted
            .as_deref()
            .and_then(Theme::from_token)
            .unwrap_or_default();
        self.replace(theme)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Persists on every call, even when the value is the same.
    pub fn set_dark(&mut self, is_dark: bool) -> ThemeChange {
        let theme = Theme::from_dark(is_dark);
        if let Err(e) = self.storage.set(THEME_KEY, theme.token()) {
            log::warn!("couldn't persist theme: {e}");
        }
        self.replace(theme)
    }

    pub fn toggle(&mut self) -> ThemeChange {
        self.set_dark(!self.is_dark())
    }

    fn replace(&mut self, theme: Theme) -> ThemeChange {
        if self.theme == theme {
            ThemeChange::Unchanged
        } else {
            log::debug!("theme changed to {}", theme.token());
            self.theme = theme;
            ThemeChange::Changed(theme)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_to_dark_without_storage() {
        let storage = MemoryStore::new();
        let store = ThemeStore::load(&storage);
        assert!(store.is_dark());
        // hydration alone never writes
        assert!(!storage.contains(THEME_KEY));
    }

    #[test]
    fn test_hydrates_light() {
        let storage = MemoryStore::new();
        storage.set(THEME_KEY, "light").unwrap();
        let store = ThemeStore::load(&storage);
        assert!(!store.is_dark());
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_unrecognized_token_falls_back_to_dark() {
        let storage = MemoryStore::new();
        storage.set(THEME_KEY, "blue").unwrap();
        let mut store = ThemeStore::new(&storage);
        assert_eq!(store.hydrate(), ThemeChange::Unchanged);
        assert!(store.is_dark());
    }

    #[test]
    fn test_set_persists_token() {
        let storage = MemoryStore::new();
        let mut store = ThemeStore::load(&storage);
        assert_eq!(store.set_dark(false), ThemeChange::Changed(Theme::Light));
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(store.toggle(), ThemeChange::Changed(Theme::Dark));
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_setting_same_value_is_idempotent() {
        let storage = MemoryStore::new();
        let mut store = ThemeStore::load(&storage);
        store.set_dark(false);
        assert_eq!(store.set_dark(false), ThemeChange::Unchanged);
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert!(!store.is_dark());
    }

    #[test]
    fn test_same_value_still_written_once_missing() {
        // default is dark, but an explicit set must still persist the token
        let storage = MemoryStore::new();
        let mut store = ThemeStore::load(&storage);
        assert_eq!(store.set_dark(true), ThemeChange::Unchanged);
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_survives_reload() {
        let storage = MemoryStore::new();
        {
            let mut store = ThemeStore::load(&storage);
            store.toggle();
        }
        let reloaded = ThemeStore::load(&storage);
        assert_eq!(reloaded.theme(), Theme::Light);
    }
}

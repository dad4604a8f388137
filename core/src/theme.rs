use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// Stored apart from the application state; the two never share a lifecycle.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub fn load_theme<S: KeyValueStore + ?Sized>(store: &S) -> Theme {
    store
        .get(THEME_STORAGE_KEY)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

pub fn save_theme<S: KeyValueStore + ?Sized>(store: &S, theme: Theme) -> Result<(), StorageError> {
    store.set(THEME_STORAGE_KEY, theme.as_str())
}

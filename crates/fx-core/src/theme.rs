//! Dark/light display preference.

use crate::constants::*;
use crate::surface::{Outbox, SurfaceOp, TargetId};
use fnv::FnvHashMap;

/// Key/value persistence for user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Session-only store, used when no persistent storage is available.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: FnvHashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_owned(), value.to_owned());
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Anything other than an explicit `"light"` falls back to dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => THEME_ICON_DARK,
            Theme::Light => THEME_ICON_LIGHT,
        }
    }
}

pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    theme: Theme,
    icon: Option<TargetId>,
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("theme", &self.theme)
            .field("icon", &self.icon)
            .finish()
    }
}

impl ThemeController {
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self {
            store,
            theme: Theme::Dark,
            icon: None,
        }
    }

    /// Reads the stored preference. The page markup is dark already, so only
    /// a light preference touches the body class and icon.
    pub fn load(&mut self, icon: Option<TargetId>, out: &mut Outbox) -> Theme {
        self.icon = icon;
        self.theme = Theme::from_stored(self.store.get(THEME_STORAGE_KEY).as_deref());
        if self.theme == Theme::Light {
            self.apply(out);
        }
        self.theme
    }

    pub fn toggle(&mut self, out: &mut Outbox) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(THEME_STORAGE_KEY, self.theme.as_str());
        self.apply(out);
        self.theme
    }

    fn apply(&self, out: &mut Outbox) {
        out.push(SurfaceOp::SetRootClass {
            class: THEME_LIGHT_CLASS,
            enabled: self.theme == Theme::Light,
        });
        if let Some(icon) = self.icon {
            out.push(SurfaceOp::SetClassName {
                target: icon,
                class: self.theme.icon_class(),
            });
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}

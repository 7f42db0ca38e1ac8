//! Dark/light theme preference.
//!
//! The preference lives in `localStorage` under `"theme"` and is reflected
//! onto `<html data-theme="...">`. When the toggle button contains an icon,
//! its class is swapped between moon (dark) and sun (light).
//!
//! TRADE-OFFS
//! ==========
//! Initialization reads the stored value but never writes the default back,
//! so a first visit leaves storage untouched until the visitor toggles.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::SiteConfig;
use crate::consts::{ICON_CLASS_DARK, ICON_CLASS_LIGHT, THEME_ATTRIBUTE, THEME_STORAGE_KEY};
use crate::dom::{Dom, PreferenceStore};
use crate::error::ChromeError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a stored or applied value. Anything unrecognised is `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Full class attribute for the status icon.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => ICON_CLASS_DARK,
            Self::Light => ICON_CLASS_LIGHT,
        }
    }
}

/// Read the stored preference, defaulting to dark.
#[must_use]
pub fn read_preference<S: PreferenceStore>(store: &S) -> Theme {
    store.load(THEME_STORAGE_KEY).as_deref().and_then(Theme::parse).unwrap_or_default()
}

/// Theme controller bound to the root element and the optional status icon.
pub struct ThemeController<D: Dom> {
    root: Option<D::Node>,
    trigger: Option<D::Node>,
    icon: Option<D::Node>,
}

impl<D: Dom> ThemeController<D> {
    pub fn bind(dom: &D, config: &SiteConfig) -> Self {
        Self {
            root: dom.document_element(),
            trigger: dom.query(&config.theme_toggle),
            icon: dom.query(&config.theme_icon),
        }
    }

    /// The toggle button, if the page has one.
    #[must_use]
    pub fn trigger(&self) -> Option<&D::Node> {
        self.trigger.as_ref()
    }

    /// Apply the stored preference (or the dark default) to the page.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the theme cannot be applied.
    pub fn initialize<S: PreferenceStore>(&self, dom: &D, store: &S) -> Result<Theme, ChromeError> {
        let theme = read_preference(store);
        self.apply(dom, theme)?;
        Ok(theme)
    }

    /// Reflect `theme` onto the root attribute and the icon.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Dom`] if the root attribute cannot be written.
    pub fn apply(&self, dom: &D, theme: Theme) -> Result<(), ChromeError> {
        if let Some(root) = &self.root {
            dom.set_attribute(root, THEME_ATTRIBUTE, theme.as_str())?;
        }
        if let Some(icon) = &self.icon {
            dom.set_class_name(icon, theme.icon_class());
        }
        Ok(())
    }

    /// The theme currently on the page: the root attribute first, then the
    /// stored preference, then dark.
    #[must_use]
    pub fn current<S: PreferenceStore>(&self, dom: &D, store: &S) -> Theme {
        self.root
            .as_ref()
            .and_then(|root| dom.attribute(root, THEME_ATTRIBUTE))
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or_else(|| read_preference(store))
    }

    /// Switch to the opposite theme, persist it, and apply it.
    ///
    /// The page is updated even when storage refuses the write; the storage
    /// error is still returned so the host can log it.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::Storage`] if the preference was not saved, or
    /// [`ChromeError::Dom`] if the page could not be updated.
    pub fn toggle<S: PreferenceStore>(&self, dom: &D, store: &S) -> Result<Theme, ChromeError> {
        let next = self.current(dom, store).toggled();
        let saved = store.save(THEME_STORAGE_KEY, next.as_str());
        self.apply(dom, next)?;
        saved?;
        log::debug!("theme switched to {}", next.as_str());
        Ok(next)
    }
}

//! Light/dark theme preference.
//!
//! Reads the stored preference once, defaulting to (and persisting) dark.
//! Each toggle flips the `dark` class on `<body>`, writes the new value back
//! and refreshes the two labels and two icons beside the toggle control.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::dom::{Element, Page, PreferenceStore};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
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
}

/// Elements the theme writes to. Any of them may be missing.
#[derive(Debug, Clone)]
pub struct ThemeControls<E> {
    pub body: Option<E>,
    pub dark_label: Option<E>,
    pub light_label: Option<E>,
    pub moon_icon: Option<E>,
    pub sun_icon: Option<E>,
}

impl<E: Element> ThemeControls<E> {
    pub fn locate<P: Page<Element = E>>(page: &P) -> Self {
        Self {
            body: page.body(),
            dark_label: page.query(".dark-label"),
            light_label: page.query(".light-label"),
            moon_icon: page.by_id("moon-icon"),
            sun_icon: page.by_id("sun-icon"),
        }
    }
}

pub struct ThemeManager<E, S> {
    controls: ThemeControls<E>,
    store: S,
    storage_key: String,
    theme: Theme,
}

impl<E: Element, S: PreferenceStore> ThemeManager<E, S> {
    /// Restore the stored theme and apply it to the page.
    pub fn load(controls: ThemeControls<E>, store: S, storage_key: &str) -> Self {
        let theme = if store.get(storage_key).as_deref() == Some(Theme::Light.as_str()) {
            Theme::Light
        } else {
            store.set(storage_key, Theme::Dark.as_str());
            Theme::Dark
        };
        let manager = Self { controls, store, storage_key: storage_key.to_owned(), theme };
        manager.apply();
        manager
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip the theme, persist it and reapply. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.set(&self.storage_key, self.theme.as_str());
        self.apply();
        log::debug!("theme switched to {}", self.theme.as_str());
        self.theme
    }

    fn apply(&self) {
        let dark = self.theme == Theme::Dark;
        if let Some(body) = &self.controls.body {
            if dark {
                body.add_class("dark");
            } else {
                body.remove_class("dark");
            }
        }

        // The label for the mode you can switch *to* is the highlighted one.
        let (Some(dark_label), Some(light_label)) = (&self.controls.dark_label, &self.controls.light_label) else {
            return;
        };
        let (highlighted, dimmed) = if dark { (light_label, dark_label) } else { (dark_label, light_label) };
        highlighted.add_class("active");
        dimmed.remove_class("active");

        if let (Some(moon), Some(sun)) = (&self.controls.moon_icon, &self.controls.sun_icon) {
            moon.set_style("display", if dark { "block" } else { "none" });
            sun.set_style("display", if dark { "none" } else { "block" });
        }
    }
}

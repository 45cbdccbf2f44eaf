//! Theme Preference
//!
//! Light/dark preference persisted under the `"theme"` local storage key.
//! The preference lives in an explicit context rather than loose global
//! mutation; a root-level effect mirrors it to storage and to the `dark`
//! class on the document element.

use leptos::*;

/// Local storage key holding the preference.
pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but `"dark"` falls back to light.
    pub fn from_storage(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Theme context provided at the app root.
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }
}

/// Provide the theme context, seeded from local storage. Changes are written
/// back to storage and mirrored onto the document element.
pub fn provide_theme() {
    let initial = Theme::from_storage(read_stored_theme().as_deref());
    let theme = create_rw_signal(initial);

    create_effect(move |_| {
        let theme = theme.get();
        write_stored_theme(theme);
        sync_document_class(theme);
    });

    provide_context(ThemeState { theme });
}

/// Fetch the theme context.
pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().expect("ThemeState not provided")
}

fn read_stored_theme() -> Option<String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
}

fn write_stored_theme(theme: Theme) {
    if let Some(storage) =
        web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

fn sync_document_class(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let _ = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_storage() {
        assert_eq!(Theme::from_storage(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_storage(Some("light")), Theme::Light);
        assert_eq!(Theme::from_storage(Some("solarized")), Theme::Light);
        assert_eq!(Theme::from_storage(None), Theme::Light);
    }

    #[test]
    fn test_storage_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_storage(Some(theme.as_str())), theme);
        }
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}

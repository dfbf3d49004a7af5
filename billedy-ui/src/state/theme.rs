//! Theme State
//!
//! Light/dark/system theme, persisted to local storage and applied as the
//! `dark` class on the document element.

use leptos::*;

const STORAGE_KEY: &str = "billedy_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }

    /// Resolve to dark or light given the OS preference
    pub fn is_dark(&self, system_prefers_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => system_prefers_dark,
        }
    }

    /// Next theme in the toggle cycle
    pub fn next(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀",
            Theme::Dark => "☾",
            Theme::System => "◐",
        }
    }
}

/// Reactive theme state provided to the component tree
#[derive(Clone, Copy)]
pub struct ThemeState {
    pub theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn cycle(&self) {
        self.theme.update(|t| *t = t.next());
    }
}

/// Provide theme state and keep the document class in sync with it
pub fn provide_theme() {
    let initial = load_theme().unwrap_or_default();
    let theme = create_rw_signal(initial);

    create_effect(move |_| {
        let current = theme.get();
        save_theme(current);
        apply_theme(current.is_dark(system_prefers_dark()));
    });

    provide_context(ThemeState { theme });
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>().expect("ThemeState not found")
}

fn load_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(STORAGE_KEY).ok()??;
    Theme::parse(&value)
}

fn save_theme(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.as_str());
        }
    }
}

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme(dark: bool) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        let _ = root.class_list().toggle_with_force("dark", dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse("Dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse(" light "), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn test_is_dark() {
        assert!(Theme::Dark.is_dark(false));
        assert!(!Theme::Light.is_dark(true));
        assert!(Theme::System.is_dark(true));
        assert!(!Theme::System.is_dark(false));
    }

    #[test]
    fn test_cycle_visits_all() {
        let start = Theme::default();
        assert_eq!(start.next().next().next(), start);
        assert_ne!(start.next(), start);
    }
}

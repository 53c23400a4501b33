//! Theme system for the airdrop portal.
//!
//! Two themes: the default gradient dashboard look and a light variant.

use dioxus::prelude::*;

/// Available themes for the portal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Gradient,
    Light,
}

impl Theme {
    /// Returns the CSS data-theme attribute value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Gradient => "gradient",
            Theme::Light => "light",
        }
    }

    /// Returns the display name for the theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Gradient => "Gradient",
            Theme::Light => "Light",
        }
    }

    /// Returns all available themes.
    pub fn all() -> &'static [Theme] {
        &[Theme::Gradient, Theme::Light]
    }

    pub fn from_css_value(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            _ => Theme::Gradient,
        }
    }
}

/// Global signal for current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Themed root wrapper component.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();

    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}

/// Theme switcher dropdown component.
#[component]
pub fn ThemeSwitcher() -> Element {
    let current_theme = *CURRENT_THEME.read();

    rsx! {
        div { class: "theme-switcher",
            select {
                value: "{current_theme.css_value()}",
                onchange: move |evt| {
                    *CURRENT_THEME.write() = Theme::from_css_value(&evt.value());
                },
                for t in Theme::all() {
                    option {
                        value: "{t.css_value()}",
                        selected: *t == current_theme,
                        "{t.display_name()}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_values_round_trip() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_css_value(theme.css_value()), *theme);
        }
        assert_eq!(Theme::from_css_value("unknown"), Theme::Gradient);
    }
}

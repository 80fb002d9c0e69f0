use serde::{Deserialize, Serialize};

use crate::scheme::SchemePreference;

/// Visual palette passed to the diagram engine. Wire names follow the
/// engine's convention: light mode is called `default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[serde(rename = "default")]
    Light,
    Dark,
}

impl Theme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "default",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host-facing theme setting: follow the OS preference, or pin a palette.
///
/// A pinned choice never touches the preference query, mirroring a site-level
/// theme override taking precedence over the system setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeChoice {
    /// Resolves to a concrete theme, querying `scheme` only for `Auto`.
    ///
    /// A failed query is recovered here: the fallback is Light, and the
    /// failure never reaches the caller.
    pub fn resolve(self, scheme: &dyn SchemePreference) -> Theme {
        match self {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Auto => match scheme.prefers_dark() {
                Ok(prefers_dark) => Theme::from_prefers_dark(prefers_dark),
                Err(e) => {
                    tracing::warn!(error = %e, "color scheme query failed; using light theme");
                    Theme::Light
                }
            },
        }
    }
}

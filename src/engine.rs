use serde::Serialize;

use crate::theme::Theme;

/// Configuration handed to the diagram engine on each (re-)initialization.
///
/// Serializes to the JSON object shape the engine recognizes, e.g.
/// `{"startOnLoad":true,"theme":"dark"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InitConfig {
    #[serde(rename = "startOnLoad")]
    pub start_on_load: bool,
    pub theme: Theme,
}

impl InitConfig {
    /// Config the initializer produces: scan the displayed content for
    /// diagram markup and render it with the given palette.
    pub fn auto(theme: Theme) -> Self {
        Self {
            start_on_load: true,
            theme,
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// The external diagram library's initialization entry point.
///
/// Rendering correctness, and any failure during initialization, are the
/// engine's own contract; the initializer neither catches nor wraps them.
pub trait DiagramEngine {
    fn initialize(&mut self, config: InitConfig);
}

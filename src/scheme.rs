/// Live "does the user prefer a dark color scheme" query.
///
/// Implementations must answer from the current OS state on every call;
/// caching a reading across navigations would let the selection go stale.
pub trait SchemePreference {
    fn prefers_dark(&self) -> anyhow::Result<bool>;
}

/// OS-backed preference query.
pub struct SystemScheme;

impl SchemePreference for SystemScheme {
    fn prefers_dark(&self) -> anyhow::Result<bool> {
        Ok(match dark_light::detect() {
            dark_light::Mode::Dark => true,
            // No stated preference reads as not-dark.
            dark_light::Mode::Light | dark_light::Mode::Default => false,
        })
    }
}

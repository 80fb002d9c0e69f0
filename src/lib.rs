mod engine;
mod nav;
mod scheme;
mod theme;

pub use engine::{DiagramEngine, InitConfig};
pub use nav::{DocumentFeed, NavigationSource};
pub use scheme::{SchemePreference, SystemScheme};
pub use theme::{Theme, ThemeChoice};

/// Wires the three external pieces together: registers one handler with
/// `nav` that, on every navigation-completion signal, re-reads the color
/// scheme preference and re-initializes `engine` with content discovery
/// enabled.
///
/// Re-initialization is unconditional on purpose: the navigation may have
/// swapped in content the engine has never scanned. Nothing is cached
/// between events, so a preference toggled between two navigations shows
/// up on the next one.
pub fn install(
    nav: &mut dyn NavigationSource,
    engine: impl DiagramEngine + 'static,
    scheme: impl SchemePreference + 'static,
) {
    install_with(nav, engine, scheme, ThemeChoice::Auto);
}

/// Same wiring with an explicit theme choice. `Auto` behaves like
/// [`install`]; a pinned choice skips the preference query entirely.
pub fn install_with(
    nav: &mut dyn NavigationSource,
    mut engine: impl DiagramEngine + 'static,
    scheme: impl SchemePreference + 'static,
    choice: ThemeChoice,
) {
    nav.subscribe(Box::new(move || {
        let theme = choice.resolve(&scheme);
        tracing::debug!(theme = %theme, "reinitializing diagram engine");
        engine.initialize(InitConfig::auto(theme));
    }));
}

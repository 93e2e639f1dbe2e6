use leptos::*;

use crate::config::LoginConfig;

/// Runs `test` inside a throwaway reactive runtime.
pub fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = test();
    runtime.dispose();
    result
}

/// Renders a view to its server-side HTML string for markup assertions.
pub fn render_to_html<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_runtime(|| view().into_view().render_to_string().to_string())
}

/// Installs a `LoginConfig` fake into the current reactive context and
/// returns it for assertions.
pub fn provide_login_config() -> LoginConfig {
    let config = LoginConfig {
        login_url: "http://localhost:3000/api/login".into(),
        ..LoginConfig::default()
    };
    provide_context(config.clone());
    config
}

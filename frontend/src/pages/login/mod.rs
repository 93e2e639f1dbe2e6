use leptos::*;

pub mod components;
pub mod repository;
pub mod status;
pub mod utils;
pub mod validation;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

use crate::components::header::Header;

/// Login screen: header bar plus the credential form.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Header title="Accounts" />
        <LoginPanel />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{provide_login_config, render_to_html};

    #[test]
    fn login_page_carries_header_and_form() {
        let html = render_to_html(|| {
            provide_login_config();
            view! { <LoginPage /> }
        });
        assert!(html.contains("Accounts"));
        assert!(html.contains("healthify-me-header"));
        assert!(html.contains("Sign In"));
    }
}

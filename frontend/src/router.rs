use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    config,
    pages::{home::HomePage, login::LoginPage},
};

/// Static route table: login is shown at both `/` and `/login`.
pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/home"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_context(config::snapshot());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=LoginPage/>
                <Route path="/login" view=LoginPage/>
                <Route path="/home" view=HomePage/>
            </Routes>
        </Router>
    }
}

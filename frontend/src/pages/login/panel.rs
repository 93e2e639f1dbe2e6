use leptos::{ev, *};

use super::components::form::LoginForm;
use super::view_model::use_login_view_model;

#[component]
pub fn LoginPanel() -> impl IntoView {
    // Navigation collaborator: a settled successful attempt moves to /home.
    let on_success = Callback::new(move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/home");
        }
    });
    let vm = use_login_view_model(on_success);

    let handle_submit = {
        let vm = vm.clone();
        Callback::new(move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit();
        })
    };

    view! { <LoginForm form=vm.form status=vm.status on_submit=handle_submit /> }
}

use leptos::*;

use crate::config::Messages;
use crate::pages::login::validation::{Field, Verdict};

/// Inline error line under an input. Renders an empty paragraph while the
/// field is untouched or valid so the test hook stays in the tree.
#[component]
pub fn FieldError(
    field: Field,
    #[prop(into)] verdict: Signal<Option<Verdict>>,
    messages: Messages,
) -> impl IntoView {
    let test_id = match field {
        Field::Email => "email-error",
        Field::Password => "pwd-error",
    };
    let text = move || {
        verdict
            .get()
            .and_then(|v| v.message(field, &messages).map(str::to_string))
            .unwrap_or_default()
    };

    view! {
        <p data-testid=test_id class="mt-1 text-left text-sm text-status-error-text">
            {text}
        </p>
    }
}

#[component]
pub fn PendingLoader(#[prop(into)] pending: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || pending.get() fallback=|| ()>
            <div data-testid="loader" class="flex items-center justify-center gap-2 py-2 text-action-primary-bg">
                <span class="animate-spin rounded-full h-4 w-4 border-b-2 border-current"></span>
            </div>
        </Show>
    }
}

/// Shared notice for a settled failed attempt. Transport failures and
/// rejected credentials surface the same text.
#[component]
pub fn SubmitFailureNotice(#[prop(into)] failed: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || failed.get() fallback=|| ()>
            <p class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded">
                "Login Failed!"
            </p>
        </Show>
    }
}

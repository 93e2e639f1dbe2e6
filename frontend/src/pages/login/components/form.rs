use leptos::{ev, *};

use super::messages::{FieldError, PendingLoader, SubmitFailureNotice};
use crate::config::LoginConfig;
use crate::pages::login::status::SubmitStatus;
use crate::pages::login::utils::LoginFormState;
use crate::pages::login::validation::{Field, Verdict};

const INPUT_BASE: &str = "appearance-none relative block w-full px-3 py-2 border placeholder-gray-500 text-gray-900 rounded-md focus:outline-none focus:ring-blue-500 focus:border-blue-500 sm:text-sm";

fn field_classes(verdict: Option<Verdict>) -> String {
    match verdict {
        Some(v) if !v.is_valid() => format!("{} error border-status-error-border", INPUT_BASE),
        _ => format!("{} border-gray-300", INPUT_BASE),
    }
}

#[component]
pub fn LoginForm(
    form: LoginFormState,
    status: RwSignal<SubmitStatus>,
    on_submit: Callback<ev::SubmitEvent>,
) -> impl IntoView {
    let config = use_context::<LoginConfig>().unwrap_or_default();
    let messages = config.messages;

    let email_class = move || field_classes(form.email_verdict.get());
    let password_class = move || field_classes(form.password_verdict.get());
    let disabled = move || !form.can_submit() || status.get().is_pending();
    let pending = Signal::derive(move || status.get().is_pending());
    let failed = Signal::derive(move || status.get().is_failure());

    view! {
        <section class="login-container min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4 sm:px-6 lg:px-8">
            <div class="login-box max-w-md w-full space-y-6 text-center">
                <img src="/assets/hm_logo.png" alt="healthify-me" class="mx-auto h-12"/>
                <h3 class="text-2xl font-extrabold text-gray-900">"Sign In"</h3>
                <h5 class="text-sm text-gray-600">"Use your Healthifyme Account"</h5>
                <form class="mt-6 space-y-4" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <input
                            data-testid="email"
                            id="email"
                            name="email"
                            type="text"
                            placeholder="Enter your Email"
                            class=email_class
                            prop:value=form.email
                            on:input=move |ev| form.edit(Field::Email, event_target_value(&ev))
                        />
                        <FieldError
                            field=Field::Email
                            verdict=form.email_verdict
                            messages=messages.clone()
                        />
                    </div>
                    <div>
                        <input
                            data-testid="password"
                            id="password"
                            name="password"
                            type="password"
                            placeholder="Enter your Password"
                            class=password_class
                            prop:value=form.password
                            on:input=move |ev| form.edit(Field::Password, event_target_value(&ev))
                        />
                        <FieldError
                            field=Field::Password
                            verdict=form.password_verdict
                            messages=messages.clone()
                        />
                    </div>

                    <PendingLoader pending=pending />
                    <SubmitFailureNotice failed=failed />

                    <button
                        type="submit"
                        disabled=disabled
                        class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500 disabled:opacity-50"
                    >
                        "Login"
                    </button>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_verdicts_mark_the_input() {
        assert!(field_classes(Some(Verdict::TooShort)).contains("error"));
        assert!(field_classes(Some(Verdict::FormatInvalid)).contains("error"));
    }

    #[test]
    fn valid_and_untouched_inputs_are_unmarked() {
        assert!(!field_classes(Some(Verdict::Valid)).contains("error"));
        assert!(!field_classes(None).contains("error"));
    }
}

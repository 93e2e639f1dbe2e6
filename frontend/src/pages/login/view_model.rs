use std::rc::Rc;

use leptos::*;

use super::repository::LoginRepository;
use super::status::{SubmitEvent, SubmitStatus};
use super::utils::LoginFormState;
use crate::api::{ApiClient, ApiError, Credentials};

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub status: RwSignal<SubmitStatus>,
    login_action: Action<Credentials, Result<(), ApiError>>,
}

/// Wires form state, the submission status machine and the login request
/// into one unit. `on_success` fires exactly once per successful attempt.
pub fn use_login_view_model(on_success: Callback<()>) -> LoginViewModel {
    let form = LoginFormState::new();
    let status = create_rw_signal(SubmitStatus::Idle);
    let repo = match use_context::<ApiClient>() {
        Some(api) => LoginRepository::new_with_client(Rc::new(api)),
        None => LoginRepository::new(),
    };

    let login_action = create_action(move |credentials: &Credentials| {
        let repo = repo.clone();
        let credentials = credentials.clone();
        async move { run_submit(&repo, status, on_success, credentials).await }
    });

    LoginViewModel {
        form,
        status,
        login_action,
    }
}

impl LoginViewModel {
    /// Guarded submit: ignored unless both fields are valid and no request
    /// is already in flight.
    pub fn submit(&self) {
        if !self.form.can_submit() || self.status.get_untracked().is_pending() {
            return;
        }
        self.status.update(|s| *s = s.step(SubmitEvent::Submitted));
        self.login_action.dispatch(self.form.credentials());
    }
}

/// Performs one login attempt and delivers exactly one outcome event to the
/// status machine. Transport failures and rejected credentials both settle
/// as `Failed`.
pub(crate) async fn run_submit(
    repo: &LoginRepository,
    status: RwSignal<SubmitStatus>,
    on_success: Callback<()>,
    credentials: Credentials,
) -> Result<(), ApiError> {
    let result = repo.login(credentials).await;
    let event = match &result {
        Ok(()) => SubmitEvent::Succeeded,
        Err(_) => SubmitEvent::Failed,
    };
    let previous = status.get_untracked();
    let next = previous.step(event);
    status.set(next);
    if previous.is_pending() && next == SubmitStatus::Success {
        on_success.call(());
    }
    result
}

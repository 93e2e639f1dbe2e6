use leptos::*;

use super::validation::{validate, Field, Verdict};
use crate::api::Credentials;

/// Signals backing the two controlled inputs. A `None` verdict means the
/// field has not been touched yet, so no error text is rendered for it.
#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub email_verdict: RwSignal<Option<Verdict>>,
    pub password_verdict: RwSignal<Option<Verdict>>,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            email_verdict: create_rw_signal(None),
            password_verdict: create_rw_signal(None),
        }
    }

    /// Stores the new value for `field`, then re-runs validation for it.
    /// Invalid input only changes display state, it never fails.
    pub fn edit(&self, field: Field, value: String) {
        let verdict = validate(field, &value);
        match field {
            Field::Email => {
                self.email.set(value);
                self.email_verdict.set(Some(verdict));
            }
            Field::Password => {
                self.password.set(value);
                self.password_verdict.set(Some(verdict));
            }
        }
    }

    pub fn verdict(&self, field: Field) -> Option<Verdict> {
        match field {
            Field::Email => self.email_verdict.get(),
            Field::Password => self.password_verdict.get(),
        }
    }

    /// The submit control is enabled only when both fields report `Valid`.
    pub fn can_submit(&self) -> bool {
        self.email_verdict.get() == Some(Verdict::Valid)
            && self.password_verdict.get() == Some(Verdict::Valid)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self::new()
    }
}

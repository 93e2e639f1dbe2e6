use crate::config::Messages;

/// Fields the login form validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// Outcome of validating a single field's raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    EmptyRequired,
    TooShort,
    FormatInvalid,
    Valid,
}

impl Verdict {
    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }

    /// Maps a verdict to its configured display text; `Valid` maps to none.
    pub fn message(self, field: Field, messages: &Messages) -> Option<&str> {
        match self {
            Verdict::Valid => None,
            Verdict::EmptyRequired => Some(&messages.required_error),
            Verdict::TooShort => Some(&messages.pwd_too_short),
            Verdict::FormatInvalid => Some(match field {
                Field::Email => &messages.email_format_error,
                Field::Password => &messages.pwd_format,
            }),
        }
    }
}

/// Pure validation rules: one verdict per field and raw value.
pub fn validate(field: Field, value: &str) -> Verdict {
    match field {
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
    }
}

fn validate_password(value: &str) -> Verdict {
    if value.is_empty() {
        Verdict::EmptyRequired
    } else if value.chars().count() < 6 {
        Verdict::TooShort
    } else if !value.chars().any(|c| c.is_ascii_uppercase()) {
        Verdict::FormatInvalid
    } else {
        Verdict::Valid
    }
}

fn validate_email(value: &str) -> Verdict {
    if value.is_empty() {
        Verdict::EmptyRequired
    } else if matches_email_shape(value) {
        Verdict::Valid
    } else {
        Verdict::FormatInvalid
    }
}

/// Unanchored match for `[^@]+@[^.]+\..+`: a non-`@` character, an `@`, at
/// least one non-dot character, a dot, and at least one trailing character.
fn matches_email_shape(value: &str) -> bool {
    value.char_indices().any(|(i, c)| {
        if c != '@' {
            return false;
        }
        let has_local_part = value[..i]
            .chars()
            .next_back()
            .map_or(false, |prev| prev != '@');
        let rest = &value[i + 1..];
        has_local_part
            && match rest.find('.') {
                Some(dot) => dot > 0 && dot + 1 < rest.len(),
                None => false,
            }
    })
}

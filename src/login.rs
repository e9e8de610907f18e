use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PASSWORD_MESSAGE: &str = "Password must be at least 6 characters";
pub const LOGIN_REDIRECT: &str = "/dashboard";

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub remember_me: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub redirect: Option<String>,
    pub errors: FieldErrors,
}

pub fn validate(form: &LoginForm) -> FieldErrors {
    FieldErrors {
        email: (!is_valid_email(&form.email)).then(|| EMAIL_MESSAGE.to_string()),
        password: (form.password.chars().count() < MIN_PASSWORD_LEN)
            .then(|| PASSWORD_MESSAGE.to_string()),
    }
}

/// `local@domain.tld` with no whitespace and a letters-only TLD of two or more.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || local.starts_with('.') || local.ends_with('.') {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    let tld = labels[labels.len() - 1];
    labels_ok && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Stand-in for a sign-in round trip: waits, then always succeeds.
pub async fn simulate_sign_in(form: &LoginForm, delay: Duration) {
    debug!(
        remember_me = form.remember_me.is_some(),
        delay_ms = delay.as_millis() as u64,
        "simulating sign-in"
    );
    tokio::time::sleep(delay).await;
}

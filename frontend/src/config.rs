use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use wasm_bindgen::JsValue;

pub const DEFAULT_LOGIN_URL: &str = "http://localhost:3000/api/login";

/// User-facing validation and failure strings, overridable at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    pub pwd_format: String,
    pub pwd_too_short: String,
    pub email_format_error: String,
    pub required_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            pwd_format: "Password must contain an uppercase letter!".into(),
            pwd_too_short: "Password length too short!".into(),
            email_format_error: "Invalid email format!".into(),
            required_error: "This field is required!".into(),
        }
    }
}

/// Collaborator-supplied constants for the login screen. Passed to the form
/// through context so tests can substitute fakes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    pub login_url: String,
    pub messages: Messages,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.into(),
            messages: Messages::default(),
        }
    }
}

/// Raw shape of `./config.json` and the window globals. Absent fields fall
/// back to the compiled defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub login_url: Option<String>,
    pub pwd_format: Option<String>,
    pub pwd_too_short: Option<String>,
    pub email_format_error: Option<String>,
    pub required_error: Option<String>,
}

impl RuntimeConfig {
    pub fn into_login_config(self) -> LoginConfig {
        let defaults = Messages::default();
        LoginConfig {
            login_url: self.login_url.unwrap_or_else(|| DEFAULT_LOGIN_URL.into()),
            messages: Messages {
                pwd_format: self.pwd_format.unwrap_or(defaults.pwd_format),
                pwd_too_short: self.pwd_too_short.unwrap_or(defaults.pwd_too_short),
                email_format_error: self
                    .email_format_error
                    .unwrap_or(defaults.email_format_error),
                required_error: self.required_error.unwrap_or(defaults.required_error),
            },
        }
    }
}

static LOGIN_CONFIG: OnceLock<LoginConfig> = OnceLock::new();

fn parse_global(key: &str) -> Option<RuntimeConfig> {
    // Expect an optional global object, e.g.
    // window.__ACCOUNTS_ENV = { "login_url": "...", "required_error": "..." }
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let json: String = js_sys::JSON::stringify(&value).ok()?.into();
    serde_json::from_str(&json).ok()
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // env.js takes precedence over a previously written config object.
    parse_global("__ACCOUNTS_ENV").or_else(|| parse_global("__ACCOUNTS_CONFIG"))
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn cache(config: LoginConfig) -> LoginConfig {
    let _ = LOGIN_CONFIG.set(config.clone());
    config
}

pub async fn await_login_config() -> LoginConfig {
    if let Some(cached) = LOGIN_CONFIG.get() {
        return cached.clone();
    }
    if let Some(raw) = snapshot_from_globals() {
        return cache(raw.into_login_config());
    }
    if let Some(raw) = fetch_runtime_config().await {
        return cache(raw.into_login_config());
    }
    cache(LoginConfig::default())
}

pub async fn await_login_url() -> String {
    await_login_config().await.login_url
}

/// Last resolved config, or the defaults when `init` has not completed.
pub fn snapshot() -> LoginConfig {
    LOGIN_CONFIG.get().cloned().unwrap_or_default()
}

pub async fn init() {
    let _ = await_login_config().await;
}

use std::{env, path::PathBuf, time::Duration};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
const DEFAULT_SHARE_BASE_URL: &str = "https://habittracker.app";
const DEFAULT_SHARE_HANDLE: &str = "u123456";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub seed_path: Option<PathBuf>,
    pub login_delay: Duration,
    pub share_base_url: String,
    pub share_handle: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_path: None,
            login_delay: Duration::from_millis(DEFAULT_LOGIN_DELAY_MS),
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            share_handle: DEFAULT_SHARE_HANDLE.to_string(),
        }
    }
}

impl Config {
    /// Reads `PORT`, `HABIT_SEED_PATH`, `LOGIN_DELAY_MS`, `SHARE_BASE_URL` and
    /// `SHARE_HANDLE`, keeping defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            port: non_empty("PORT")
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            seed_path: non_empty("HABIT_SEED_PATH").map(PathBuf::from),
            login_delay: non_empty("LOGIN_DELAY_MS")
                .and_then(|value| value.parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.login_delay),
            share_base_url: non_empty("SHARE_BASE_URL")
                .map(|value| value.trim_end_matches('/').to_string())
                .unwrap_or(defaults.share_base_url),
            share_handle: non_empty("SHARE_HANDLE").unwrap_or(defaults.share_handle),
        }
    }

    pub fn share_link(&self) -> String {
        format!("{}/share/{}", self.share_base_url, self.share_handle)
    }
}

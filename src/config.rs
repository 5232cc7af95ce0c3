use std::env;
use std::path::Path;

use crate::error::PanelError;
use crate::models::{SshKey, UserProfile};

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://avatars.dicebear.com/api";
pub const DEFAULT_AVATAR_STYLE: &str = "bottts";
pub const DEFAULT_PROFILE_USERNAME: &str = "user";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_avatar_base_url() -> String {
    sanitize_base_url(
        &env::var("AVATAR_BASE_URL").unwrap_or_default(),
        DEFAULT_AVATAR_BASE_URL,
    )
}

pub fn get_avatar_style() -> String {
    non_empty_var("AVATAR_STYLE").unwrap_or_else(|| DEFAULT_AVATAR_STYLE.to_string())
}

/// Profile shown by `serve` and `render`, read from `PROFILE_*` variables.
pub fn get_profile() -> UserProfile {
    UserProfile {
        first_name: non_empty_var("PROFILE_FIRST_NAME").unwrap_or_default(),
        last_name: non_empty_var("PROFILE_LAST_NAME").unwrap_or_default(),
        username: non_empty_var("PROFILE_USERNAME")
            .unwrap_or_else(|| DEFAULT_PROFILE_USERNAME.to_string()),
        email: non_empty_var("PROFILE_EMAIL").unwrap_or_default(),
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn sanitize_base_url(raw: &str, default: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Initial key list for the in-memory store, read once at startup and never written back.
///
/// Line breaks are dropped from each key: the delete form posts the key back through a
/// hidden input, and browsers submit a bare LF there as CRLF.
pub fn load_seed_keys(path: &Path) -> Result<Vec<SshKey>, PanelError> {
    let raw = std::fs::read_to_string(path)?;
    let keys: Vec<SshKey> = serde_json::from_str(&raw)?;
    Ok(keys
        .into_iter()
        .map(|k| SshKey::new(single_line(&k.name), single_line(&k.key)))
        .collect())
}

fn single_line(value: &str) -> String {
    value.trim().chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

use std::env;
use std::io::Write;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use userpanel::{config, PanelError, SshKey};

// Tests in this file mutate process-wide environment variables
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_sanitize_base_url_removes_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://avatars.example.com/api///", "x"),
        "https://avatars.example.com/api"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://panel.example.com/  ", "x"),
        "https://panel.example.com"
    );
}

#[test]
fn test_sanitize_base_url_falls_back_to_default() {
    assert_eq!(config::sanitize_base_url("   ", "http://fallback"), "http://fallback");
    assert_eq!(config::sanitize_base_url("", "http://fallback"), "http://fallback");
}

#[test]
fn test_get_avatar_base_url() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("AVATAR_BASE_URL", "https://avatars.internal/api/");
    assert_eq!(config::get_avatar_base_url(), "https://avatars.internal/api");

    env::remove_var("AVATAR_BASE_URL");
    assert_eq!(config::get_avatar_base_url(), config::DEFAULT_AVATAR_BASE_URL);
}

#[test]
fn test_get_avatar_style_defaults_when_blank() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("AVATAR_STYLE", "  ");
    assert_eq!(config::get_avatar_style(), "bottts");

    env::set_var("AVATAR_STYLE", "identicon");
    assert_eq!(config::get_avatar_style(), "identicon");
    env::remove_var("AVATAR_STYLE");
}

#[test]
fn test_get_profile_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("PROFILE_FIRST_NAME", "Ada");
    env::set_var("PROFILE_LAST_NAME", " Lovelace ");
    env::set_var("PROFILE_USERNAME", "ada");
    env::set_var("PROFILE_EMAIL", "ada@example.com");

    let profile = config::get_profile();
    assert_eq!(profile.first_name, "Ada");
    assert_eq!(profile.last_name, "Lovelace");
    assert_eq!(profile.username, "ada");
    assert_eq!(profile.email, "ada@example.com");
    assert_eq!(profile.full_name(), "Ada Lovelace");

    for name in ["PROFILE_FIRST_NAME", "PROFILE_LAST_NAME", "PROFILE_USERNAME", "PROFILE_EMAIL"] {
        env::remove_var(name);
    }
    let profile = config::get_profile();
    assert_eq!(profile.username, config::DEFAULT_PROFILE_USERNAME);
    assert!(profile.first_name.is_empty());
}

#[test]
fn test_load_seed_keys_reads_json_list() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"name": "laptop", "key": "ssh-ed25519 AAAA1"}}, {{"name": "ci", "key": "ssh-rsa AAAA2"}}]"#
    )
    .unwrap();

    let keys = config::load_seed_keys(file.path()).unwrap();
    assert_eq!(
        keys,
        vec![
            SshKey::new("laptop", "ssh-ed25519 AAAA1"),
            SshKey::new("ci", "ssh-rsa AAAA2"),
        ]
    );
}

#[test]
fn test_load_seed_keys_rejects_malformed_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"name\": \"not a list\"}}").unwrap();

    let err = config::load_seed_keys(file.path()).unwrap_err();
    assert!(matches!(err, PanelError::InvalidKeyFile(_)));
}

#[test]
fn test_load_seed_keys_drops_line_breaks() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"name": "wrapped\n", "key": "ssh-ed25519 AAAA\r\nBBBB\n"}}]"#
    )
    .unwrap();

    let keys = config::load_seed_keys(file.path()).unwrap();
    assert_eq!(keys, vec![SshKey::new("wrapped", "ssh-ed25519 AAAABBBB")]);
}

/// Join `path` onto `base_url`.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return base_url.to_string();
    }
    format!("{}/{}", base_url.trim_end_matches('/'), trimmed)
}

use crate::config::DEFAULT_AVATAR_BASE_URL;
use crate::utils::absolute_url;

/// Avatar image URL for `seed` drawn in `style`, served by the default avatar service.
pub fn generate_avatar_url(style: &str, seed: &str) -> String {
    generate_avatar_url_with_base(DEFAULT_AVATAR_BASE_URL, style, seed)
}

/// Same as [`generate_avatar_url`] against a custom avatar service root.
pub fn generate_avatar_url_with_base(base_url: &str, style: &str, seed: &str) -> String {
    let path = format!(
        "/{}/{}.svg",
        urlencoding::encode(style.trim()),
        urlencoding::encode(seed)
    );
    absolute_url(base_url.trim_end_matches('/'), &path)
}

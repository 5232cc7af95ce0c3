use std::sync::Arc;

use crate::config::{DEFAULT_AVATAR_BASE_URL, DEFAULT_AVATAR_STYLE};
use crate::models::UserProfile;
use crate::store::SshKeyStore;

#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<UserProfile>,
    pub store: Arc<dyn SshKeyStore>,
    pub avatar_base_url: String,
    pub avatar_style: String,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn new(profile: UserProfile, store: Arc<dyn SshKeyStore>) -> Self {
        Self {
            profile: Arc::new(profile),
            store,
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
            avatar_style: DEFAULT_AVATAR_STYLE.to_string(),
            custom_css: None,
        }
    }
}

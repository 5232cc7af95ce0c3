use askama::Template;

use crate::models::{SshKey, UserProfile};

#[derive(Template)]
#[template(path = "user_panel.html")]
pub struct UserPanelTemplate<'a> {
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub profile: &'a UserProfile,
    pub full_name: String,
    pub avatar_url: String,
    pub info_active: bool,
    pub ssh_keys_active: bool,
    pub info_url: String,
    pub ssh_keys_url: String,
    pub open_modal_url: String,
    pub add_key_url: String,
    pub delete_key_url: String,
    pub ssh_keys: &'a [SshKey],
    pub show_ssh_modal: bool,
    pub form_name: &'a str,
    pub form_key: &'a str,
    pub name_error: String,
    pub key_error: String,
}

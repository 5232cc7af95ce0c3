pub mod app_state;
pub mod ssh_key;
pub mod ssh_key_form;
pub mod user_profile;

pub use app_state::AppState;
pub use ssh_key::SshKey;
pub use ssh_key_form::{SshKeyForm, SshKeyFormErrors};
pub use user_profile::UserProfile;

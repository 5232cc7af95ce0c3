use serde::Deserialize;

use super::SshKey;

/// Raw values posted by the "New SSH key" form.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SshKeyForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub key: String,
}

/// Per-field messages for a rejected submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SshKeyFormErrors {
    pub name: Option<String>,
    pub key: Option<String>,
}

impl SshKeyFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.key.is_none()
    }
}

impl SshKeyForm {
    /// Both fields are required; content is passed through untouched apart from trimming.
    pub fn into_key(self) -> Result<SshKey, (Self, SshKeyFormErrors)> {
        let name = self.name.trim().to_string();
        let key = self.key.trim().to_string();
        let mut errors = SshKeyFormErrors::default();
        if name.is_empty() {
            errors.name = Some("Please insert a name for the key".into());
        }
        if key.is_empty() {
            errors.key = Some("Please insert the public key".into());
        }
        if errors.is_empty() {
            Ok(SshKey { name, key })
        } else {
            Err((self, errors))
        }
    }
}

use serde::{Deserialize, Serialize};

/// A named public key. The panel never looks inside `key`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SshKey {
    pub name: String,
    pub key: String,
}

impl SshKey {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }
}

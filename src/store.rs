use futures_util::future::{BoxFuture, FutureExt};
use tokio::sync::RwLock;

use crate::models::SshKey;
use crate::panel::{AddKeyOutcome, SshKeyActions};

/// Key source of the hosting shell: lists keys and serves as the panel's callbacks.
pub trait SshKeyStore: Send + Sync {
    fn list(&self) -> BoxFuture<'_, Option<Vec<SshKey>>>;

    fn actions(&self) -> &dyn SshKeyActions;
}

/// Process-local key list. Nothing is written to disk.
#[derive(Debug, Default)]
pub struct InMemoryKeyStore {
    keys: RwLock<Vec<SshKey>>,
}

impl InMemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keys(keys: Vec<SshKey>) -> Self {
        Self {
            keys: RwLock::new(keys),
        }
    }

    pub async fn snapshot(&self) -> Vec<SshKey> {
        self.keys.read().await.clone()
    }
}

impl SshKeyActions for InMemoryKeyStore {
    fn add_key(&self, key: SshKey) -> AddKeyOutcome<'_> {
        AddKeyOutcome::Pending(
            async move {
                let mut keys = self.keys.write().await;
                if keys.iter().any(|k| k.name == key.name) {
                    tracing::warn!(name = %key.name, "SSH key name already in use");
                    return false;
                }
                tracing::info!(name = %key.name, "SSH key added");
                keys.push(key);
                true
            }
            .boxed(),
        )
    }

    fn delete_key<'a>(&'a self, key: &'a SshKey) -> BoxFuture<'a, bool> {
        async move {
            let mut keys = self.keys.write().await;
            match keys.iter().position(|k| k == key) {
                Some(idx) => {
                    keys.remove(idx);
                    tracing::info!(name = %key.name, "SSH key deleted");
                    true
                }
                None => {
                    tracing::warn!(name = %key.name, "SSH key not found");
                    false
                }
            }
        }
        .boxed()
    }
}

impl SshKeyStore for InMemoryKeyStore {
    fn list(&self) -> BoxFuture<'_, Option<Vec<SshKey>>> {
        async move { Some(self.snapshot().await) }.boxed()
    }

    fn actions(&self) -> &dyn SshKeyActions {
        self
    }
}

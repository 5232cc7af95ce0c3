pub mod avatar;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod panel;
pub mod routes;
pub mod store;
pub mod templates;
pub mod utils;

pub use avatar::generate_avatar_url;
pub use error::PanelError;
pub use models::{SshKey, UserProfile};
pub use panel::{AddKeyOutcome, PanelTab, SshKeyActions, UserPanel};
pub use routes::build_router;
pub use store::{InMemoryKeyStore, SshKeyStore};

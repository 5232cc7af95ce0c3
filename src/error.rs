/// Error types for rendering and serving the account panel
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanelError {
    /// A template failed to render
    #[error("Template render error: {0}")]
    Render(#[from] askama::Error),

    /// Host/port pair could not be parsed into a socket address
    #[error("Invalid host/port format: {0}")]
    InvalidAddress(String),

    /// A key seed file is not a JSON list of `{ "name", "key" }` records
    #[error("Invalid SSH key file: {0}")]
    InvalidKeyFile(#[from] serde_json::Error),

    /// Reading a stylesheet or binding the listener failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

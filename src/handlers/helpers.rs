use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::error::PanelError;
use crate::models::{AppState, SshKey};
use crate::panel::{PanelTab, UserPanel, DEFAULT_PANEL_PATH};
use crate::utils::build_query_string;

pub fn build_panel(state: &AppState, ssh_keys: Option<Vec<SshKey>>) -> UserPanel<'_> {
    UserPanel::new(state.profile.as_ref(), ssh_keys, state.store.actions())
        .with_base_path(DEFAULT_PANEL_PATH)
        .with_avatar(state.avatar_base_url.clone(), state.avatar_style.clone())
}

/// Panel HTML for the current store contents, as printed by the `render` subcommand.
pub async fn render_once(state: &AppState, tab: PanelTab, modal: bool) -> Result<String, PanelError> {
    let keys = state.store.list().await;
    let mut panel = build_panel(state, keys);
    panel.select_tab(tab);
    if modal {
        panel.open_ssh_modal();
    }
    panel.render()
}

pub fn render_panel(panel: &UserPanel<'_>, status: StatusCode) -> Response {
    match panel.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

pub fn panel_url(tab: PanelTab, notice: Option<&str>) -> String {
    format!(
        "{}?{}",
        DEFAULT_PANEL_PATH,
        build_query_string(&[("tab", tab.slug()), ("notice", notice.unwrap_or(""))])
    )
}

/// Message shown for a `notice` query value; unknown values are ignored.
pub fn notice_message(notice: Option<&str>) -> Option<&'static str> {
    match notice? {
        "delete-failed" => Some("Could not delete the SSH key"),
        _ => None,
    }
}

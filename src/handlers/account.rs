use axum::{
    extract::{Form, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::models::{AppState, SshKey, SshKeyForm, SshKeyFormErrors};
use crate::panel::{PanelTab, DEFAULT_PANEL_PATH};

use super::helpers::{build_panel, notice_message, panel_url, render_panel};

#[derive(Debug, Default, Deserialize)]
pub struct PanelQuery {
    pub tab: Option<String>,
    pub modal: Option<String>,
    pub notice: Option<String>,
}

pub async fn root_get() -> Redirect {
    Redirect::to(DEFAULT_PANEL_PATH)
}

pub async fn account_get(State(state): State<AppState>, Query(q): Query<PanelQuery>) -> Response {
    let keys = state.store.list().await;
    let mut panel = build_panel(&state, keys);
    if let Some(message) = notice_message(q.notice.as_deref()) {
        panel = panel.with_flash(message);
    }
    panel.select_tab(PanelTab::from_slug(q.tab.as_deref()));
    if q.modal.as_deref() == Some("add") {
        panel.open_ssh_modal();
    }
    render_panel(&panel, StatusCode::OK)
}

pub async fn ssh_key_add(State(state): State<AppState>, Form(form): Form<SshKeyForm>) -> Response {
    let keys = state.store.list().await;
    let mut panel = build_panel(&state, keys);
    panel.open_ssh_modal();

    let new_key = match form.into_key() {
        Ok(key) => key,
        Err((form, errors)) => {
            tracing::debug!(?errors, "Incomplete SSH key form");
            panel.show_form(form, errors);
            return render_panel(&panel, StatusCode::UNPROCESSABLE_ENTITY);
        }
    };
    let submitted = SshKeyForm {
        name: new_key.name.clone(),
        key: new_key.key.clone(),
    };

    if panel.add_key(new_key).await {
        return Redirect::to(&panel_url(PanelTab::SshKeys, None)).into_response();
    }

    tracing::info!(name = %submitted.name, "SSH key was not added");
    let mut panel = panel.with_flash("Could not add the SSH key");
    panel.show_form(submitted, SshKeyFormErrors::default());
    render_panel(&panel, StatusCode::UNPROCESSABLE_ENTITY)
}

pub async fn ssh_key_delete(State(state): State<AppState>, Form(key): Form<SshKey>) -> Redirect {
    let panel = build_panel(&state, None);
    if panel.delete_key(&key).await {
        Redirect::to(&panel_url(PanelTab::SshKeys, None))
    } else {
        tracing::info!(name = %key.name, "SSH key was not deleted");
        Redirect::to(&panel_url(PanelTab::SshKeys, Some("delete-failed")))
    }
}

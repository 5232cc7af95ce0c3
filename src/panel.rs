//! The account panel: profile summary plus an Info / SSH Keys tab view.
//!
//! The panel owns two pieces of UI state, the active tab and whether the
//! "New SSH key" modal is visible. Everything else is handed in by the
//! caller: the profile, the key list and the add/delete callbacks.

use askama::Template;
use futures_util::future::BoxFuture;

use crate::avatar::generate_avatar_url_with_base;
use crate::config::{DEFAULT_AVATAR_BASE_URL, DEFAULT_AVATAR_STYLE};
use crate::error::PanelError;
use crate::models::{SshKey, SshKeyForm, SshKeyFormErrors, UserProfile};
use crate::templates::UserPanelTemplate;
use crate::utils::build_query_string;

pub const DEFAULT_PANEL_PATH: &str = "/account";

/// Result of an add-key callback, which may be known immediately or only after awaiting.
pub enum AddKeyOutcome<'a> {
    Ready(bool),
    Pending(BoxFuture<'a, bool>),
}

impl AddKeyOutcome<'_> {
    pub async fn resolve(self) -> bool {
        match self {
            AddKeyOutcome::Ready(ok) => ok,
            AddKeyOutcome::Pending(fut) => fut.await,
        }
    }
}

impl From<bool> for AddKeyOutcome<'_> {
    fn from(ok: bool) -> Self {
        AddKeyOutcome::Ready(ok)
    }
}

/// Callbacks supplied by whoever hosts the panel. Both report success as a bool.
pub trait SshKeyActions: Send + Sync {
    fn add_key(&self, key: SshKey) -> AddKeyOutcome<'_>;

    fn delete_key<'a>(&'a self, key: &'a SshKey) -> BoxFuture<'a, bool>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelTab {
    #[default]
    Info,
    SshKeys,
}

impl PanelTab {
    pub fn slug(self) -> &'static str {
        match self {
            PanelTab::Info => "info",
            PanelTab::SshKeys => "ssh-keys",
        }
    }

    /// Unknown or missing slugs fall back to the Info tab.
    pub fn from_slug(slug: Option<&str>) -> Self {
        match slug.map(str::trim) {
            Some("ssh-keys") => PanelTab::SshKeys,
            _ => PanelTab::Info,
        }
    }
}

pub struct UserPanel<'a> {
    profile: &'a UserProfile,
    ssh_keys: Option<Vec<SshKey>>,
    actions: &'a dyn SshKeyActions,
    base_path: String,
    avatar_base_url: String,
    avatar_style: String,
    active_tab: PanelTab,
    show_ssh_modal: bool,
    form: SshKeyForm,
    form_errors: SshKeyFormErrors,
    flash_messages: Vec<String>,
}

impl<'a> UserPanel<'a> {
    pub fn new(
        profile: &'a UserProfile,
        ssh_keys: Option<Vec<SshKey>>,
        actions: &'a dyn SshKeyActions,
    ) -> Self {
        Self {
            profile,
            ssh_keys,
            actions,
            base_path: DEFAULT_PANEL_PATH.to_string(),
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
            avatar_style: DEFAULT_AVATAR_STYLE.to_string(),
            active_tab: PanelTab::Info,
            show_ssh_modal: false,
            form: SshKeyForm::default(),
            form_errors: SshKeyFormErrors::default(),
            flash_messages: Vec::new(),
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_avatar(mut self, base_url: impl Into<String>, style: impl Into<String>) -> Self {
        self.avatar_base_url = base_url.into();
        self.avatar_style = style.into();
        self
    }

    pub fn with_flash(mut self, message: impl Into<String>) -> Self {
        self.flash_messages.push(message.into());
        self
    }

    pub fn active_tab(&self) -> PanelTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: PanelTab) {
        self.active_tab = tab;
    }

    pub fn is_ssh_modal_open(&self) -> bool {
        self.show_ssh_modal
    }

    pub fn ssh_keys(&self) -> &[SshKey] {
        self.ssh_keys.as_deref().unwrap_or(&[])
    }

    /// "Add SSH key" click. The modal lives on the SSH Keys tab, so that tab is brought forward.
    pub fn open_ssh_modal(&mut self) {
        self.active_tab = PanelTab::SshKeys;
        self.show_ssh_modal = true;
    }

    /// Cancel. Clears whatever the form held.
    pub fn close_modal(&mut self) {
        self.show_ssh_modal = false;
        self.form = SshKeyForm::default();
        self.form_errors = SshKeyFormErrors::default();
    }

    /// Re-display a submission inside the open modal, e.g. after a failed add.
    pub fn show_form(&mut self, form: SshKeyForm, errors: SshKeyFormErrors) {
        self.open_ssh_modal();
        self.form = form;
        self.form_errors = errors;
    }

    /// Hands `new_key` to the add callback; the modal closes only when it reports success.
    pub async fn add_key(&mut self, new_key: SshKey) -> bool {
        let actions = self.actions;
        let ok = actions.add_key(new_key).resolve().await;
        if ok {
            self.close_modal();
        }
        ok
    }

    pub async fn delete_key(&self, key: &SshKey) -> bool {
        self.actions.delete_key(key).await
    }

    pub fn tab_url(&self, tab: PanelTab) -> String {
        format!(
            "{}?{}",
            self.base_path,
            build_query_string(&[("tab", tab.slug())])
        )
    }

    pub fn open_modal_url(&self) -> String {
        format!(
            "{}?{}",
            self.base_path,
            build_query_string(&[("tab", PanelTab::SshKeys.slug()), ("modal", "add")])
        )
    }

    pub fn template(&self) -> UserPanelTemplate<'_> {
        let flash_messages = self.flash_messages.clone();
        let has_flash_messages = !flash_messages.is_empty();
        UserPanelTemplate {
            flash_messages,
            has_flash_messages,
            profile: self.profile,
            full_name: self.profile.full_name(),
            avatar_url: generate_avatar_url_with_base(
                &self.avatar_base_url,
                &self.avatar_style,
                &self.profile.username,
            ),
            info_active: self.active_tab == PanelTab::Info,
            ssh_keys_active: self.active_tab == PanelTab::SshKeys,
            info_url: self.tab_url(PanelTab::Info),
            ssh_keys_url: self.tab_url(PanelTab::SshKeys),
            open_modal_url: self.open_modal_url(),
            add_key_url: format!("{}/ssh-keys", self.base_path),
            delete_key_url: format!("{}/ssh-keys/delete", self.base_path),
            ssh_keys: self.ssh_keys(),
            show_ssh_modal: self.show_ssh_modal,
            form_name: &self.form.name,
            form_key: &self.form.key,
            name_error: self.form_errors.name.clone().unwrap_or_default(),
            key_error: self.form_errors.key.clone().unwrap_or_default(),
        }
    }

    pub fn render(&self) -> Result<String, PanelError> {
        Ok(self.template().render()?)
    }
}

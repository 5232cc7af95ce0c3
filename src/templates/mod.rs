pub mod user_panel_template;

pub use user_panel_template::UserPanelTemplate;

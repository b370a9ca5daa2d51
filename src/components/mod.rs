pub mod app;
pub mod settings_panel;
pub mod slide_log;
pub mod slide_panel;

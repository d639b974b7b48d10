mod editor;
mod file_probe;
mod picker;
mod settings_source;
mod state_store;

pub use editor::Editor;
pub use file_probe::FileProbe;
pub use picker::Picker;
pub use settings_source::SettingsSource;
pub use state_store::StateStore;

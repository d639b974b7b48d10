pub mod dialoguer_picker;
pub mod filesystem_probe;
pub mod json_state_store;
pub mod stdout_editor;
pub mod toml_settings;

pub use dialoguer_picker::DialoguerPicker;
pub use filesystem_probe::FilesystemProbe;
pub use json_state_store::JsonStateStore;
pub use stdout_editor::StdoutEditor;
pub use toml_settings::TomlSettingsFile;

pub mod fake_file_probe;
pub mod memory_editor;
pub mod memory_state_store;
pub mod scripted_picker;

#[allow(unused_imports)]
pub use fake_file_probe::FakeFileProbe;
#[allow(unused_imports)]
pub use memory_editor::MemoryEditor;
#[allow(unused_imports)]
pub use memory_state_store::MemoryStateStore;
#[allow(unused_imports)]
pub use scripted_picker::ScriptedPicker;

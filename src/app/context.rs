use crate::ports::{Editor, FileProbe, Picker, StateStore};

/// Application context holding the host capabilities a command runs against.
pub struct AppContext<E: Editor, P: Picker, S: StateStore, F: FileProbe> {
    editor: E,
    picker: P,
    state: S,
    probe: F,
}

impl<E: Editor, P: Picker, S: StateStore, F: FileProbe> AppContext<E, P, S, F> {
    /// Create a new application context.
    pub fn new(editor: E, picker: P, state: S, probe: F) -> Self {
        Self { editor, picker, state, probe }
    }

    /// Get a reference to the editor.
    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// Get a mutable reference to the editor.
    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    /// Get a mutable reference to the picker.
    pub fn picker_mut(&mut self) -> &mut P {
        &mut self.picker
    }

    /// Get a reference to the state store.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Get a mutable reference to the state store.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Get a reference to the file probe.
    pub fn probe(&self) -> &F {
        &self.probe
    }
}

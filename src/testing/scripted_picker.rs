use crate::domain::AppError;
use crate::ports::Picker;

/// Picker returning a scripted answer and recording what it was shown.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct ScriptedPicker {
    answer: Option<String>,
    pub shown: Vec<Vec<String>>,
}

#[allow(dead_code)]
impl ScriptedPicker {
    /// Picker that selects the option labeled `label`.
    pub fn choosing(label: &str) -> Self {
        Self { answer: Some(label.to_string()), shown: Vec::new() }
    }

    /// Picker that is dismissed without a choice.
    pub fn dismissing() -> Self {
        Self::default()
    }
}

impl Picker for ScriptedPicker {
    fn pick(&mut self, _prompt: &str, labels: &[String]) -> Result<Option<usize>, AppError> {
        self.shown.push(labels.to_vec());
        Ok(self.answer.as_ref().and_then(|answer| labels.iter().position(|label| label == answer)))
    }
}

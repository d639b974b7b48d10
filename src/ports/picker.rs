use crate::domain::AppError;

/// Port for asking the user to choose one of several labeled options.
pub trait Picker {
    /// Returns the index of the chosen label, or `None` when dismissed.
    fn pick(&mut self, prompt: &str, labels: &[String]) -> Result<Option<usize>, AppError>;
}

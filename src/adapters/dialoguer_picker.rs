use std::io::{self, ErrorKind, IsTerminal};

use dialoguer::{Error as DialoguerError, Select};
use tracing::debug;

use crate::domain::AppError;
use crate::ports::Picker;

/// Terminal picker drawn on stderr.
///
/// Without a terminal to draw on, every prompt counts as dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPicker;

impl Picker for DialoguerPicker {
    fn pick(&mut self, prompt: &str, labels: &[String]) -> Result<Option<usize>, AppError> {
        if !io::stderr().is_terminal() {
            debug!("stderr is not a terminal; treating selection as dismissed");
            return Ok(None);
        }

        match Select::new().with_prompt(prompt).items(labels).default(0).interact_opt() {
            Ok(selection) => Ok(selection),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }
}

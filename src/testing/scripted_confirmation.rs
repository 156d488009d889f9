use std::cell::RefCell;

use crate::domain::AppError;
use crate::domain::confirmation::is_affirmative;
use crate::ports::ConfirmationPort;

/// Confirmation that answers with a fixed line and remembers the summary it was shown.
pub struct ScriptedConfirmation {
    pub answer: String,
    pub shown: RefCell<Option<String>>,
}

#[allow(dead_code)]
impl ScriptedConfirmation {
    pub fn new(answer: &str) -> Self {
        Self { answer: answer.to_string(), shown: RefCell::new(None) }
    }

    pub fn was_asked(&self) -> bool {
        self.shown.borrow().is_some()
    }
}

impl ConfirmationPort for ScriptedConfirmation {
    fn confirm(&self, summary: &str) -> Result<bool, AppError> {
        *self.shown.borrow_mut() = Some(summary.to_string());
        Ok(is_affirmative(&self.answer))
    }
}

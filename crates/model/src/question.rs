use alloc::{string::String, vec::Vec};
use serde::{Deserialize, Serialize};

/// Acceptable schema for quiz questions.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Question {
    /// Prompt to be displayed to the player.
    pub prompt: String,
    /// Possible answers to select from.
    pub options: Vec<String>,
    /// Index of the option with the correct answer.
    pub answer: u8,
    /// Shown as feedback once an answer has been locked in.
    pub explanation: String,
}

impl Question {
    /// Whether the given selection matches the correct option.
    pub fn is_correct(&self, option: usize) -> bool {
        usize::from(self.answer) == option
    }
}

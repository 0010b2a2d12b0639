use crate::constants::{DELETE_DELAY_MS, HOLD_DELAY_MS, NEXT_TEXT_DELAY_MS, TYPE_DELAY_MS};

/// Endless type-and-delete rotation over a fixed list of texts. Each `step`
/// produces the string to display and the delay before the next step, so the
/// web layer can drive it with a self-rescheduling timeout.
#[derive(Clone, Debug)]
pub struct TypingLoop {
    texts: Vec<String>,
    text_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingLoop {
    pub fn new(texts: Vec<String>) -> Self {
        Self {
            texts,
            text_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn step(&mut self) -> (String, u32) {
        if self.texts.is_empty() {
            return (String::new(), NEXT_TEXT_DELAY_MS);
        }
        let current: Vec<char> = self.texts[self.text_index].chars().collect();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(current.len());
        }
        let shown: String = current[..self.char_index].iter().collect();

        let delay = if !self.deleting && self.char_index == current.len() {
            self.deleting = true;
            HOLD_DELAY_MS
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
            NEXT_TEXT_DELAY_MS
        } else if self.deleting {
            DELETE_DELAY_MS
        } else {
            TYPE_DELAY_MS
        };
        (shown, delay)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    revealed_bytes: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            revealed_bytes: 0,
        }
    }

    pub fn completed(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            revealed_bytes: text.len(),
            text,
        }
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.revealed_bytes]
    }

    pub fn is_complete(&self) -> bool {
        self.revealed_bytes >= self.text.len()
    }

    /// Reveals one more character. Returns `false` once the full text is shown.
    pub fn tick(&mut self) -> bool {
        let Some(next) = self.text[self.revealed_bytes..].chars().next() else {
            return false;
        };

        self.revealed_bytes += next.len_utf8();
        true
    }
}

//! Expression input line.

/// State of the expression input line.
#[derive(Debug)]
pub struct InputState {
    is_active: bool,
    buffer: String,
}

impl InputState {
    /// Create a new, inactive input state.
    pub fn new() -> Self {
        Self {
            is_active: false,
            buffer: String::new(),
        }
    }

    /// Check if the input line is being edited.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Begin editing, seeded with the given text.
    pub fn start(&mut self, seed: &str) {
        self.is_active = true;
        self.buffer.clear();
        self.buffer.push_str(seed);
    }

    /// Append a character.
    pub fn input(&mut self, c: char) {
        self.buffer.push(c);
    }

    /// Remove the last character.
    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    /// Finish editing and hand back the buffer contents.
    pub fn submit(&mut self) -> String {
        self.is_active = false;
        std::mem::take(&mut self.buffer)
    }

    /// Abandon editing.
    pub fn cancel(&mut self) {
        self.is_active = false;
        self.buffer.clear();
    }

    /// Current buffer contents.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

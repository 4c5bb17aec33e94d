/// Matches a fixed run of `KeyboardEvent.key` values typed back to back.
#[derive(Clone, Debug)]
pub struct KeySequence {
    keys: &'static [&'static str],
    cursor: usize,
}

impl KeySequence {
    pub fn new(keys: &'static [&'static str]) -> Self {
        Self { keys, cursor: 0 }
    }

    /// Feeds one key. Returns true when it completes the sequence.
    pub fn feed(&mut self, key: &str) -> bool {
        if self.keys.get(self.cursor) == Some(&key) {
            self.cursor += 1;
            if self.cursor == self.keys.len() {
                self.cursor = 0;
                return true;
            }
        } else {
            self.cursor = 0;
        }
        false
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

use std::cell::RefCell;

use common::console::Console;

/// Keeps every printed line so tests can assert on the exact output.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: RefCell<Vec<String>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn count(&self, line: &str) -> usize {
        self.lines.borrow().iter().filter(|l| *l == line).count()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Console for RecordingConsole {
    fn print(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

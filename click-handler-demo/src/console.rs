use std::sync::Mutex;

/// The log channel actions write to.
///
/// Passed into the component instead of reached for globally, so tests can
/// swap in a [RecordingConsole].
pub trait Console: Send + Sync {
    fn log(&self, line: &str);
}

/// Writes every line as an `info` event on the `console` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingConsole;

impl Console for TracingConsole {
    fn log(&self, line: &str) {
        tracing::info!(target: "console", "{}", line);
    }
}

/// Keeps every line in memory.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("console lock poisoned").clone()
    }

    /// Remove and return everything logged so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock().expect("console lock poisoned"))
    }
}

impl Console for RecordingConsole {
    fn log(&self, line: &str) {
        self.lines
            .lock()
            .expect("console lock poisoned")
            .push(line.to_string());
    }
}

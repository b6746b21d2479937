// src/progress.rs
/// Phase reporting for the export run. The CLI prints each line to stdout;
/// tests pass a sink that records or ignores them.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once the table has been parsed, with the number of real entries.
    fn parsed(&mut self, _count: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints status lines to stdout.
pub struct ConsoleProgress;
impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn parsed(&mut self, count: usize) {
        println!("Successfully parsed {count} Pokemon.");
    }
}

/// Collects every line; handy in tests.
#[derive(Default)]
pub struct RecordingProgress {
    pub lines: Vec<String>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn log(&mut self, msg: &str) {
        self.lines.push(s!(msg));
    }

    fn parsed(&mut self, count: usize) {
        self.lines.push(format!("Successfully parsed {count} Pokemon."));
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}

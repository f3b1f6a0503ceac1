pub mod console;

/// Human-readable progress stream. There is no machine-readable output.
pub trait Progress {
    fn line(&mut self, msg: &str);

    /// Verbatim text from an external tool.
    fn raw(&mut self, text: &str);
}

/// Prefixed lines on stdout.
#[derive(Debug, Default)]
pub struct StdoutProgress;

impl Progress for StdoutProgress {
    fn line(&mut self, msg: &str) {
        println!("[ixbench] {}", msg);
    }

    fn raw(&mut self, text: &str) {
        print!("{}", text);
    }
}

/// Collects lines in memory; raw text is kept as-is.
impl Progress for Vec<String> {
    fn line(&mut self, msg: &str) {
        self.push(msg.to_string());
    }

    fn raw(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

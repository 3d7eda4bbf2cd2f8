//! Structured output abstraction for the greet CLI.
//!
//! Provides a unified interface for outputting messages in different modes:
//! - Human: Colored symbol-prefixed output for terminal display
//! - Json: Structured JSON events for programmatic consumption
//! - Quiet: Only results and errors are emitted
//!
//! The Output struct auto-detects TTY for color support and can be injected
//! with a custom writer for test capture.

use colored::ColoredString;
use greeter::ui::colors;
use serde_json::json;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Output mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable colored output
    Human,
    /// JSON-formatted structured output, one object per line
    Json,
    /// Silent mode - only results and errors
    Quiet,
}

impl OutputMode {
    /// Pick the mode from the command-line flags and the environment
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if json {
            OutputMode::Json
        } else if quiet || greeter::ui::is_quiet() {
            OutputMode::Quiet
        } else {
            OutputMode::Human
        }
    }
}

/// Output abstraction with mode-aware formatting
#[derive(Clone)]
pub struct Output {
    mode: OutputMode,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    is_tty: bool,
}

impl Output {
    /// Create a new Output writing to stdout
    pub fn new(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stdout);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stdout()))),
            is_tty,
        }
    }

    /// Create a new Output writing to stderr, for diagnostics that must not
    /// mix with results on stdout
    pub fn stderr(mode: OutputMode) -> Self {
        let is_tty = atty::is(atty::Stream::Stderr);
        Self {
            mode,
            writer: Arc::new(Mutex::new(Box::new(io::stderr()))),
            is_tty,
        }
    }

    /// Create an Output with a custom writer (for testing)
    #[cfg(test)]
    pub fn with_writer(mode: OutputMode, writer: Box<dyn Write + Send>) -> Self {
        Self {
            mode,
            writer: Arc::new(Mutex::new(writer)),
            is_tty: false, // Assume non-TTY for custom writers
        }
    }

    /// Output a greeting. Greetings are the program's result and are written
    /// in every mode.
    pub fn greeting(&self, name: Option<&str>, text: &str) {
        match self.mode {
            OutputMode::Human | OutputMode::Quiet => self.write_line(text),
            OutputMode::Json => self.json(&json!({
                "name": name,
                "greeting": text,
            })),
        }
    }

    /// Output a success message: "✓ {msg}" in green
    pub fn success(&self, msg: &str) {
        self.prefixed("✓", colors::success, "success", msg);
    }

    /// Output a warning message: "⚠ {msg}" in yellow
    pub fn warn(&self, msg: &str) {
        self.prefixed("⚠", colors::warning, "warning", msg);
    }

    /// Output an error message: "✗ {msg}" in red. Shown even in quiet mode.
    pub fn error(&self, msg: &str) {
        if self.mode == OutputMode::Quiet {
            self.write_line(&format!("✗ {}", msg));
        } else {
            self.prefixed("✗", colors::error, "error", msg);
        }
    }

    /// Output plain info text (no prefix)
    pub fn info(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => self.write_line(msg),
            OutputMode::Json => self.write_json("info", msg),
            OutputMode::Quiet => {}
        }
    }

    /// Output detail text (indented, for subordinate info)
    pub fn detail(&self, msg: &str) {
        match self.mode {
            OutputMode::Human => self.write_line(&format!("  {}", msg)),
            OutputMode::Json => self.write_json("detail", msg),
            OutputMode::Quiet => {}
        }
    }

    /// Output a structured JSON event
    pub fn json(&self, value: &serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", value);
        }
    }

    /// Write a block of text verbatim (no trailing newline added)
    pub fn raw(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = write!(writer, "{}", text);
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    fn write_json(&self, level: &str, msg: &str) {
        self.json(&json!({
            "level": level,
            "msg": msg,
        }));
    }

    /// Symbol-prefixed line in human mode (colored on a TTY), a `level`
    /// event in JSON mode, nothing in quiet mode.
    fn prefixed(&self, symbol: &str, paint: fn(&str) -> ColoredString, level: &str, msg: &str) {
        match self.mode {
            OutputMode::Human => {
                let prefix = if self.is_tty {
                    paint(symbol).to_string()
                } else {
                    symbol.to_string()
                };
                self.write_line(&format!("{} {}", prefix, msg));
            }
            OutputMode::Json => self.write_json(level, msg),
            OutputMode::Quiet => {}
        }
    }

    /// Get the current output mode
    pub fn mode(&self) -> OutputMode {
        self.mode
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    // Test-specific writer that wraps Arc<Mutex<Vec<u8>>>
    pub(crate) struct TestWriter {
        buffer: Arc<Mutex<Vec<u8>>>,
    }

    impl TestWriter {
        pub(crate) fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buffer = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    buffer: buffer.clone(),
                },
                buffer,
            )
        }
    }

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.buffer.lock().unwrap().flush()
        }
    }

    /// Capture everything written through an Output in `mode`
    pub(crate) fn capture(mode: OutputMode) -> (Output, Arc<Mutex<Vec<u8>>>) {
        let (writer, buffer) = TestWriter::new();
        (Output::with_writer(mode, Box::new(writer)), buffer)
    }

    pub(crate) fn captured(buffer: &Arc<Mutex<Vec<u8>>>) -> String {
        String::from_utf8(buffer.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_human_mode_output() {
        let (output, buffer) = capture(OutputMode::Human);

        output.greeting(Some("Ada"), "Hello, Ada!");
        output.success("Done");
        output.warn("Warning");
        output.error("Error");
        output.info("Info");
        output.detail("Detail");

        let result = captured(&buffer);
        assert!(result.starts_with("Hello, Ada!\n"));
        assert!(result.contains("✓ Done"));
        assert!(result.contains("⚠ Warning"));
        assert!(result.contains("✗ Error"));
        assert!(result.contains("Info"));
        assert!(result.contains("  Detail"));
    }

    #[test]
    fn test_json_mode_output() {
        let (output, buffer) = capture(OutputMode::Json);

        output.greeting(Some("Ada"), "Hello, Ada!");
        output.greeting(None, "Hello!");
        output.success("Done");

        let result = captured(&buffer);
        let lines: Vec<serde_json::Value> = result
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["name"], "Ada");
        assert_eq!(lines[0]["greeting"], "Hello, Ada!");
        assert!(lines[1]["name"].is_null());
        assert_eq!(lines[1]["greeting"], "Hello!");
        assert_eq!(lines[2]["level"], "success");
        assert_eq!(lines[2]["msg"], "Done");
    }

    #[test]
    fn test_quiet_mode_keeps_greetings_and_errors() {
        let (output, buffer) = capture(OutputMode::Quiet);

        output.greeting(None, "Hello!");
        output.success("Done");
        output.warn("Warning");
        output.error("Error");
        output.info("Info");

        let result = captured(&buffer);
        assert!(result.contains("Hello!"));
        assert!(result.contains("✗ Error"));
        assert!(!result.contains("Done"));
        assert!(!result.contains("Warning"));
        assert!(!result.contains("Info"));
    }

    #[test]
    #[serial_test::serial]
    fn test_tty_prefix_uses_shared_palette() {
        let (writer, buffer) = TestWriter::new();
        let mut output = Output::with_writer(OutputMode::Human, Box::new(writer));
        output.is_tty = true;

        colored::control::set_override(true);
        output.success("Done");
        output.warn("Careful");
        output.error("Broken");
        let expected = format!(
            "{} Done\n{} Careful\n{} Broken\n",
            colors::success("✓"),
            colors::warning("⚠"),
            colors::error("✗")
        );
        colored::control::unset_override();

        assert_eq!(captured(&buffer), expected);
        assert!(expected.contains('\u{1b}'));
    }

    #[test]
    fn test_quiet_error_has_plain_prefix() {
        let (output, buffer) = capture(OutputMode::Quiet);
        output.error("Broken");
        assert_eq!(captured(&buffer), "✗ Broken\n");
    }

    #[test]
    fn test_raw_writes_verbatim() {
        let (output, buffer) = capture(OutputMode::Quiet);
        output.raw("---\na: 1\n---\n");
        assert_eq!(captured(&buffer), "---\na: 1\n---\n");
    }

    #[test]
    #[serial_test::serial]
    fn test_mode_from_flags() {
        std::env::remove_var("GREET_QUIET");
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Human);
        assert_eq!(OutputMode::from_flags(false, true), OutputMode::Quiet);
        assert_eq!(OutputMode::from_flags(true, true), OutputMode::Json);

        std::env::set_var("GREET_QUIET", "1");
        assert_eq!(OutputMode::from_flags(false, false), OutputMode::Quiet);
        std::env::remove_var("GREET_QUIET");
    }

    #[test]
    fn test_mode_getter() {
        let output = Output::new(OutputMode::Json);
        assert_eq!(output.mode(), OutputMode::Json);
    }
}

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// TestHarness runs the greet binary inside an isolated temporary directory.
/// The platform config dir is redirected into the temp dir so a developer's
/// own global config never leaks into a test.
pub struct TestHarness {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub greet_binary: PathBuf,
}

impl TestHarness {
    /// Creates a new test harness with no config files.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(".greet/config.md");

        TestHarness {
            dir: temp_dir,
            config_path,
            greet_binary: PathBuf::from(env!("CARGO_BIN_EXE_greet")),
        }
    }

    /// Creates a test harness with a project config at `.greet/config.md`.
    #[allow(dead_code)]
    pub fn with_config(config_content: &str) -> Self {
        let harness = Self::new();
        harness.write_file(".greet/config.md", config_content);
        harness
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Directory used as XDG_CONFIG_HOME for the child process.
    pub fn xdg_config_home(&self) -> PathBuf {
        self.path().join("xdg")
    }

    /// Writes a file relative to the harness directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.greet_binary);
        cmd.args(args)
            .current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.xdg_config_home())
            .env_remove("GREET_QUIET")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Executes the greet binary with the given arguments in the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to run greet")
    }

    /// Executes the greet binary with `input` piped to stdin.
    #[allow(dead_code)]
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn greet");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        child.wait_with_output().expect("Failed to wait for greet")
    }

    /// Executes the greet binary with extra environment variables.
    #[allow(dead_code)]
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &str)]) -> Output {
        let mut cmd = self.command(args);
        for (key, value) in env {
            cmd.env(key, value);
        }
        cmd.stdin(Stdio::null()).output().expect("Failed to run greet")
    }
}

/// Stdout of a finished process as a String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr of a finished process as a String.
#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

use std::str::FromStr;
use serde::Deserialize;

/// How a launched process's output streams are connected.
///
/// - `Inherit`: the child writes straight to our stdout/stderr (default).
/// - `CaptureStderr`: stdout is inherited, stderr is piped and forwarded line
///   by line into the log so failures show up next to the supervisor's own
///   messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StdioMode {
    #[default]
    Inherit,
    CaptureStderr,
}

impl FromStr for StdioMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "inherit" => Ok(StdioMode::Inherit),
            "capture_stderr" => Ok(StdioMode::CaptureStderr),
            other => Err(format!(
                "invalid stdio mode: {other} (expected \"inherit\" or \"capture_stderr\")"
            )),
        }
    }
}

/// Options applied to every process the launcher starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LaunchOptions {
    pub stdio: StdioMode,
    /// Run the joined command line through `sh -c` (`cmd /C` on Windows)
    /// instead of executing the program directly.
    pub shell: bool,
}

// src/supervisor/outcome.rs

//! Classification of how a supervised process ended.

use std::process::ExitStatus;

/// Signal that ended a process, as far as the supervisor cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    /// SIGTERM, the signal the supervisor itself sends.
    Terminate,
    /// SIGINT.
    Interrupt,
    /// Any other signal number.
    Other(i32),
}

impl ExitSignal {
    #[cfg(unix)]
    pub fn from_raw(raw: i32) -> Self {
        use nix::sys::signal::Signal;

        match Signal::try_from(raw) {
            Ok(Signal::SIGTERM) => ExitSignal::Terminate,
            Ok(Signal::SIGINT) => ExitSignal::Interrupt,
            _ => ExitSignal::Other(raw),
        }
    }

    #[cfg(not(unix))]
    pub fn from_raw(raw: i32) -> Self {
        ExitSignal::Other(raw)
    }
}

/// Exit code and signal reported for a finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitReport {
    pub code: Option<i32>,
    pub signal: Option<ExitSignal>,
}

impl ExitReport {
    pub fn with_code(code: i32) -> Self {
        Self {
            code: Some(code),
            signal: None,
        }
    }

    pub fn with_signal(signal: ExitSignal) -> Self {
        Self { code: None, signal: Some(signal) }
    }

    pub fn from_status(status: &ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal().map(ExitSignal::from_raw)
        };
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }

    pub fn classify(&self) -> ExitOutcome {
        match (self.signal, self.code) {
            (Some(ExitSignal::Terminate | ExitSignal::Interrupt), _) => ExitOutcome::Killed,
            (Some(ExitSignal::Other(raw)), _) => ExitOutcome::Acknowledged(raw),
            (None, Some(0) | None) => ExitOutcome::Completed,
            (None, Some(code)) => ExitOutcome::Failed(code),
        }
    }
}

/// Terminal state of a supervised process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    /// Ended by SIGTERM/SIGINT; expected after a re-run or shutdown.
    Killed,
    /// Exited with a nonzero code on its own.
    Failed(i32),
    /// Exited with code 0.
    Completed,
    /// Ended by some other signal; neither a success nor an error.
    Acknowledged(i32),
}

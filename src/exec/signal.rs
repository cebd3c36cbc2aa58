// src/exec/signal.rs

//! Termination signal delivery.

use std::io;

use tokio::process::Child;

/// Send SIGTERM to `child` (no-op if it has already been reaped).
#[cfg(unix)]
pub fn send_terminate(child: &mut Child) -> io::Result<()> {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let Some(pid) = child.id() else {
        return Ok(());
    };
    kill(Pid::from_raw(pid as i32), Signal::SIGTERM)?;
    Ok(())
}

/// There is no SIGTERM equivalent here; fall back to killing the process.
#[cfg(not(unix))]
pub fn send_terminate(child: &mut Child) -> io::Result<()> {
    child.start_kill()
}

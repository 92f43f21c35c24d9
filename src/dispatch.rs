use anyhow::{Context, Result};
use log::{debug, warn};
use std::process::{Command, ExitStatus};

/// Runs `command` through the host shell and waits for it to finish.
///
/// The string is handed over untouched: pipes, redirects and globbing are
/// whatever the shell makes of them.
pub fn dispatch(command: &str) -> Result<i32> {
    let mut shell = shell_command(command);
    debug!("spawning {:?}", shell);
    let status = shell
        .status()
        .with_context(|| format!("failed to execute `{}`", command))?;
    Ok(exit_code(status))
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut shell = Command::new("sh");
    shell.arg("-c").arg(command);
    shell
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut shell = Command::new("cmd");
    shell.arg("/C").arg(command);
    shell
}

fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            warn!("command terminated by signal {}", signal);
            return 128 + signal;
        }
    }
    warn!("command finished without an exit code");
    1
}

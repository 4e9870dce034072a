//! Shell invocation shared by the snippet source and the job executor.

use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

use crate::config::ShellConfig;

/// Captured result of one shell invocation.
#[derive(Debug)]
pub struct CombinedOutput {
    pub status: ExitStatus,
    /// stdout and stderr interleaved in write order
    pub output: String,
}

/// Build `<shell> -c <script>` with stderr redirected onto stdout.
///
/// The redirect happens inside the shell (`exec 2>&1; ` ahead of the script,
/// on the same line so diagnostics keep the script's line numbers) so both
/// streams share one pipe and keep their relative ordering. The shell must
/// therefore accept POSIX syntax.
pub fn command(shell: &ShellConfig, script: &str) -> Command {
    let mut cmd = Command::new(&shell.program);
    cmd.arg(&shell.script_flag)
        .arg(format!("exec 2>&1; {}", script))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    cmd
}

/// Run `script` and capture its combined output.
pub async fn run_combined(shell: &ShellConfig, script: &str) -> std::io::Result<CombinedOutput> {
    let output = command(shell, script).output().await?;

    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    // Only the shell itself can still write here, e.g. when it fails to start the script
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(CombinedOutput {
        status: output.status,
        output: combined,
    })
}

/// Describe a non-successful exit the way `ExitStatus` displays it.
pub fn describe_failure(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status: {}", code),
        None => status.to_string(),
    }
}

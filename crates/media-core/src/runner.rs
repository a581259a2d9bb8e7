//! Process execution for yt-dlp invocations

use crate::error::{DispatchError, Result};
use crate::request::Invocation;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Runs an invocation to completion
#[allow(async_fn_in_trait)]
pub trait Runner {
    async fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// Spawns the real process with the terminal's streams attached, so yt-dlp's
/// progress output appears live.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl Runner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<()> {
        debug!("Running: {}", invocation);

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DispatchError::YtDlpNotFound,
                _ => DispatchError::Launch(e),
            })?;

        debug!("{} exited with {}", invocation.program.display(), status);

        if !status.success() {
            return Err(DispatchError::YtDlpFailed(status.code()));
        }

        Ok(())
    }
}

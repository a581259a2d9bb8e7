//! Maps subcommands onto yt-dlp invocations and runs them

use crate::config::Config;
use crate::error::{DispatchError, Result};
use crate::request::{InvocationRequest, Resolution};
use crate::runner::{ProcessRunner, Runner};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Command dispatcher. One request at a time, each awaited to completion.
#[derive(Debug)]
pub struct Dispatcher<R = ProcessRunner> {
    config: Config,
    runner: R,
}

impl Dispatcher<ProcessRunner> {
    pub fn new(config: Config) -> Self {
        Self::with_runner(config, ProcessRunner)
    }
}

impl<R: Runner> Dispatcher<R> {
    pub fn with_runner(config: Config, runner: R) -> Self {
        Self { config, runner }
    }

    /// Download video plus audio, capped at `resolution` ("best" or a height).
    pub async fn download(&self, url: &str, resolution: &str) -> Result<()> {
        // Validate before touching the filesystem
        let resolution: Resolution = resolution.parse()?;
        info!("Downloading {} at {} quality", url, resolution);

        let output_dir = &self.config.output.download_directory;
        ensure_dir(output_dir).await?;

        let request = InvocationRequest::download(url, resolution, output_dir);
        self.execute(&request).await
    }

    /// Download and convert to the configured audio codec.
    pub async fn audio(&self, url: &str) -> Result<()> {
        info!("Extracting {} audio from {}", self.config.output.audio_format, url);

        let output_dir = &self.config.output.audio_directory;
        ensure_dir(output_dir).await?;

        let request = InvocationRequest::audio(url, &self.config.output.audio_format, output_dir);
        self.execute(&request).await
    }

    /// Print yt-dlp's format table for `url`.
    pub async fn list_formats(&self, url: &str) -> Result<()> {
        let request = InvocationRequest::list_formats(url);
        self.execute(&request).await
    }

    async fn execute(&self, request: &InvocationRequest) -> Result<()> {
        let invocation = request.to_invocation(&self.config.yt_dlp_program());
        debug!("{} -> {}", request.operation, invocation);
        self.runner.run(&invocation).await
    }
}

/// Create `dir` and its parents; existing directories are fine.
async fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .await
        .map_err(|source| DispatchError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })
}

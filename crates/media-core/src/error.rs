//! Error types for media-core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DispatchError>;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Invalid resolution format: {0:?}. Please enter a valid number (e.g., 720, 1080).")]
    InvalidResolution(String),

    #[error("yt-dlp not found. Install it and make sure it is on your PATH")]
    YtDlpNotFound,

    #[error("failed to execute command: yt-dlp exited with code {}", exit_code_label(.0))]
    YtDlpFailed(Option<i32>),

    #[error("failed to execute command: {0}")]
    Launch(#[source] std::io::Error),

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    LoadError(String),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

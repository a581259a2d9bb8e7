//! media-core: builds and runs yt-dlp invocations for media-cli

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod request;
pub mod runner;

pub use config::Config;
pub use dispatcher::Dispatcher;
pub use error::{ConfigError, DispatchError, Result};
pub use request::{Invocation, InvocationRequest, Operation, Resolution};
pub use runner::{ProcessRunner, Runner};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "media-cli")]
#[command(version, about = "Download media through yt-dlp")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download media from supported platforms
    #[command(long_about = "Download videos and photos from YouTube, Facebook, and Instagram.")]
    Download {
        /// Media URL
        url: String,

        /// Maximum video height (e.g., 720, 1080)
        #[arg(short, long, default_value = "best")]
        resolution: String,
    },

    /// Convert a video to audio
    #[command(long_about = "Download and convert a video to audio format.")]
    Audio {
        /// Media URL
        url: String,
    },

    /// List available formats for a video
    #[command(long_about = "List all available formats for the specified video URL.")]
    ListFormats {
        /// Media URL
        url: String,
    },

    /// Check that yt-dlp and ffmpeg are installed
    Doctor,

    /// Show configuration
    Config,
}

use anyhow::Result;
use media_core::{DispatchError, Dispatcher, Runner};
use tracing::debug;

pub async fn run<R: Runner>(dispatcher: &Dispatcher<R>, url: &str, resolution: &str) -> Result<()> {
    match dispatcher.download(url, resolution).await {
        Ok(()) => println!("Download completed successfully."),
        Err(e @ DispatchError::InvalidResolution(_)) => {
            debug!("Rejected before running yt-dlp");
            println!("{}", e);
        }
        Err(e) => {
            println!("Error downloading media: {}", e);
            println!("You can use 'media-cli list-formats [url]' to see available formats.");
        }
    }

    // Reported above; not a dispatch-level failure
    Ok(())
}

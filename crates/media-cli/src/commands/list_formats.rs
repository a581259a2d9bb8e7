use anyhow::Result;
use media_core::{Dispatcher, Runner};

/// yt-dlp prints the table itself; only failures are reported here.
pub async fn run<R: Runner>(dispatcher: &Dispatcher<R>, url: &str) -> Result<()> {
    if let Err(e) = dispatcher.list_formats(url).await {
        println!("Error listing formats: {}", e);
    }

    Ok(())
}

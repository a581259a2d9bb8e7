use anyhow::Result;
use media_core::{Dispatcher, Runner};

pub async fn run<R: Runner>(dispatcher: &Dispatcher<R>, url: &str) -> Result<()> {
    match dispatcher.audio(url).await {
        Ok(()) => println!("Audio downloaded successfully."),
        Err(e) => println!("Error downloading audio: {}", e),
    }

    Ok(())
}

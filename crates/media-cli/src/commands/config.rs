use anyhow::Result;
use media_core::Config;
use std::path::Path;

pub async fn run(config: &Config, config_path: Option<&Path>) -> Result<()> {
    println!("media-cli configuration\n");
    print!("{}", config.to_toml()?);

    if config.paths.yt_dlp.is_none() {
        println!("\n# paths.yt_dlp not set: `yt-dlp` is looked up on PATH");
    }

    // Show config file locations
    println!("\nConfig sources (later entries win):");
    println!("  1. Built-in defaults");
    if let Some(file) = Config::user_config_file() {
        let state = if file.exists() { "" } else { " (not present)" };
        println!("  2. {}{}", file.display(), state);
    }
    if let Some(p) = config_path {
        println!("  3. {} (specified)", p.display());
    }
    println!("  4. Environment variables (MEDIA_CLI_*, nested with __)");

    Ok(())
}

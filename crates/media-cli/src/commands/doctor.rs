use anyhow::Result;
use media_core::Config;
use std::path::Path;
use std::process::Command;

pub async fn run(config: &Config) -> Result<()> {
    println!("media-cli dependency check\n");

    let mut all_ok = true;

    print!("yt-dlp:  ");
    match config.yt_dlp_path() {
        Ok(path) => all_ok &= report_version(&path, "--version", |out| out.trim().to_string()),
        Err(_) => {
            println!("NOT FOUND");
            println!("         Install from https://github.com/yt-dlp/yt-dlp#installation");
            all_ok = false;
        }
    }

    // yt-dlp shells out to ffmpeg to merge streams and convert audio
    print!("ffmpeg:  ");
    match config.ffmpeg_path() {
        Ok(path) => {
            all_ok &= report_version(&path, "-version", |out| {
                // "ffmpeg version 6.1.1 Copyright ..."
                out.lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(2))
                    .unwrap_or("unknown")
                    .to_string()
            })
        }
        Err(_) => {
            println!("NOT FOUND");
            println!("         Needed for `download` merging and `audio`. Install ffmpeg from your package manager.");
            all_ok = false;
        }
    }

    println!();
    if all_ok {
        println!("All dependencies OK!");
    } else {
        println!("Some dependencies are missing. See above for installation instructions.");
    }

    Ok(())
}

fn report_version(path: &Path, flag: &str, parse: impl Fn(&str) -> String) -> bool {
    match Command::new(path).arg(flag).output() {
        Ok(out) if out.status.success() => {
            let stdout = String::from_utf8_lossy(&out.stdout);
            println!("OK ({}, {})", parse(&stdout), path.display());
            true
        }
        _ => {
            println!("FOUND at {} but failed to get version", path.display());
            false
        }
    }
}

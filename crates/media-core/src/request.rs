//! Invocation requests and the yt-dlp argument lists they expand to

use crate::error::DispatchError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// yt-dlp output template appended to the output directory.
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Maximum video height for `download`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resolution {
    /// No height cap
    #[default]
    Best,
    /// Best video at or below this height
    MaxHeight(u32),
}

impl Resolution {
    /// yt-dlp format selection: capped video plus best audio, falling back to
    /// the best single file when no such pair exists.
    pub fn format_expression(&self) -> String {
        match self {
            Resolution::Best => "bestvideo+bestaudio/best".to_string(),
            Resolution::MaxHeight(height) => {
                format!("bestvideo[height<={}]+bestaudio/best", height)
            }
        }
    }
}

impl FromStr for Resolution {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("best") {
            return Ok(Resolution::Best);
        }
        match trimmed.parse::<u32>() {
            Ok(height) if height > 0 => Ok(Resolution::MaxHeight(height)),
            _ => Err(DispatchError::InvalidResolution(s.to_string())),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Best => write!(f, "best"),
            Resolution::MaxHeight(height) => write!(f, "{}p", height),
        }
    }
}

/// What the user asked yt-dlp to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Download { resolution: Resolution },
    Audio { audio_format: String },
    ListFormats,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Download { .. } => write!(f, "download"),
            Operation::Audio { .. } => write!(f, "audio"),
            Operation::ListFormats => write!(f, "list-formats"),
        }
    }
}

/// A parsed, validated request. Built by value from CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub operation: Operation,
    pub url: String,
    /// Directory yt-dlp writes into; `None` for operations that write nothing
    pub output_dir: Option<PathBuf>,
}

impl InvocationRequest {
    pub fn download(url: &str, resolution: Resolution, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            operation: Operation::Download { resolution },
            url: url.to_string(),
            output_dir: Some(output_dir.into()),
        }
    }

    pub fn audio(url: &str, audio_format: &str, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            operation: Operation::Audio {
                audio_format: audio_format.to_string(),
            },
            url: url.to_string(),
            output_dir: Some(output_dir.into()),
        }
    }

    pub fn list_formats(url: &str) -> Self {
        Self {
            operation: Operation::ListFormats,
            url: url.to_string(),
            output_dir: None,
        }
    }

    /// Expand into the concrete yt-dlp call
    pub fn to_invocation(&self, program: &Path) -> Invocation {
        let mut args = Vec::new();

        match &self.operation {
            Operation::Download { resolution } => {
                args.push("-f".to_string());
                args.push(resolution.format_expression());
            }
            Operation::Audio { audio_format } => {
                args.push("--extract-audio".to_string());
                args.push("--audio-format".to_string());
                args.push(audio_format.clone());
            }
            Operation::ListFormats => args.push("-F".to_string()),
        }

        if let Some(dir) = &self.output_dir {
            args.push("-o".to_string());
            args.push(dir.join(OUTPUT_TEMPLATE).to_string_lossy().into_owned());
        }

        // Passed through as-is; yt-dlp decides what it can handle.
        args.push(self.url.clone());

        Invocation {
            program: program.to_path_buf(),
            args,
        }
    }
}

/// A fully formed external process call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.com/video";

    #[test]
    fn test_parse_resolution() {
        assert_eq!("720".parse::<Resolution>().unwrap(), Resolution::MaxHeight(720));
        assert_eq!(" 1080 ".parse::<Resolution>().unwrap(), Resolution::MaxHeight(1080));
        assert_eq!("best".parse::<Resolution>().unwrap(), Resolution::Best);
        assert_eq!("BEST".parse::<Resolution>().unwrap(), Resolution::Best);
    }

    #[test]
    fn test_reject_non_positive_or_non_numeric() {
        for input in ["", "hd", "720p", "0", "-480", "1.5", "4k", "99999999999"] {
            let err = input.parse::<Resolution>().unwrap_err();
            assert!(
                matches!(err, DispatchError::InvalidResolution(ref s) if s == input),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_format_expression_caps_height() {
        for height in [1, 144, 360, 720, 1080, 2160, u32::MAX] {
            assert_eq!(
                Resolution::MaxHeight(height).format_expression(),
                format!("bestvideo[height<={height}]+bestaudio/best")
            );
        }
        assert_eq!(Resolution::Best.format_expression(), "bestvideo+bestaudio/best");
    }

    #[test]
    fn test_download_invocation() {
        let request = InvocationRequest::download(URL, Resolution::MaxHeight(720), "downloads");
        let invocation = request.to_invocation(Path::new("yt-dlp"));

        assert_eq!(invocation.program, PathBuf::from("yt-dlp"));
        assert_eq!(
            invocation.args,
            vec![
                "-f",
                "bestvideo[height<=720]+bestaudio/best",
                "-o",
                "downloads/%(title)s.%(ext)s",
                URL,
            ]
        );
    }

    #[test]
    fn test_audio_invocation() {
        let request = InvocationRequest::audio(URL, "mp3", "audio");
        let invocation = request.to_invocation(Path::new("yt-dlp"));

        assert_eq!(
            invocation.args,
            vec![
                "--extract-audio",
                "--audio-format",
                "mp3",
                "-o",
                "audio/%(title)s.%(ext)s",
                URL,
            ]
        );
    }

    #[test]
    fn test_list_formats_invocation() {
        let invocation = InvocationRequest::list_formats(URL).to_invocation(Path::new("yt-dlp"));
        assert_eq!(invocation.args, vec!["-F", URL]);
    }

    #[test]
    fn test_url_passed_through_unvalidated() {
        let invocation = InvocationRequest::list_formats("not a url at all")
            .to_invocation(Path::new("/usr/bin/yt-dlp"));
        assert_eq!(invocation.args.last().unwrap(), "not a url at all");
        assert_eq!(invocation.to_string(), "/usr/bin/yt-dlp -F not a url at all");
    }
}

//! Configuration management for media-cli

use crate::error::ConfigError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Program name looked up on PATH when no explicit yt-dlp path is configured.
pub const YT_DLP: &str = "yt-dlp";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Path to yt-dlp binary (looked up on PATH if not set)
    pub yt_dlp: Option<PathBuf>,
    /// Path to FFmpeg binary, only used by `doctor`
    pub ffmpeg: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for `download`
    pub download_directory: PathBuf,
    /// Directory for `audio`
    pub audio_directory: PathBuf,
    /// Codec passed to `--audio-format`
    pub audio_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            output: OutputConfig {
                download_directory: PathBuf::from("downloads"),
                audio_directory: PathBuf::from("audio"),
                audio_format: "mp3".to_string(),
            },
        }
    }
}

impl Config {
    /// Location of the per-user config file, if the platform has a config dir.
    pub fn user_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("media-cli/config.toml"))
    }

    /// Load configuration from file and environment
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(default_config) = Self::user_config_file() {
            if default_config.exists() {
                figment = figment.merge(Toml::file(&default_config));
            }
        }

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ConfigError::LoadError(format!(
                    "config file {} does not exist",
                    path.display()
                )));
            }
            figment = figment.merge(Toml::file(path));
        }

        // MEDIA_CLI_OUTPUT__AUDIO_FORMAT -> output.audio_format
        figment = figment.merge(Env::prefixed("MEDIA_CLI_").split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::LoadError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.output.download_directory.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "output.download_directory must not be empty".to_string(),
            ));
        }
        if self.output.audio_directory.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "output.audio_directory must not be empty".to_string(),
            ));
        }
        if self.output.audio_format.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "output.audio_format must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Program to spawn for yt-dlp. Missing binaries surface at spawn time.
    pub fn yt_dlp_program(&self) -> PathBuf {
        self.paths
            .yt_dlp
            .clone()
            .unwrap_or_else(|| PathBuf::from(YT_DLP))
    }

    /// Get yt-dlp path, auto-detecting if not configured
    pub fn yt_dlp_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(ref path) = self.paths.yt_dlp {
            Ok(path.clone())
        } else {
            which::which(YT_DLP)
                .map_err(|_| ConfigError::InvalidValue("yt-dlp not found in PATH".to_string()))
        }
    }

    /// Get FFmpeg path, auto-detecting if not configured
    pub fn ffmpeg_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(ref path) = self.paths.ffmpeg {
            Ok(path.clone())
        } else {
            which::which("ffmpeg")
                .map_err(|_| ConfigError::InvalidValue("ffmpeg not found in PATH".to_string()))
        }
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_match_plain_invocation() {
        let config = Config::default();
        assert_eq!(config.output.download_directory, PathBuf::from("downloads"));
        assert_eq!(config.output.audio_directory, PathBuf::from("audio"));
        assert_eq!(config.output.audio_format, "mp3");
        assert_eq!(config.yt_dlp_program(), PathBuf::from("yt-dlp"));
    }

    #[test]
    fn test_load_merges_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.toml");
        fs::write(
            &file,
            "[paths]\nyt_dlp = \"/opt/yt-dlp/bin/yt-dlp\"\n\n[output]\naudio_format = \"opus\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&file)).unwrap();
        assert_eq!(config.yt_dlp_program(), PathBuf::from("/opt/yt-dlp/bin/yt-dlp"));
        assert_eq!(config.output.audio_format, "opus");
        assert_eq!(config.output.download_directory, PathBuf::from("downloads"));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }

    #[test]
    fn test_empty_audio_format_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.toml");
        fs::write(&file, "[output]\naudio_format = \"  \"\n").unwrap();

        let err = Config::load(Some(&file)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_to_toml_round_trips_through_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.toml");
        let mut config = Config::default();
        config.output.download_directory = PathBuf::from("videos");
        fs::write(&file, config.to_toml().unwrap()).unwrap();

        let loaded = Config::load(Some(&file)).unwrap();
        assert_eq!(loaded.output.download_directory, PathBuf::from("videos"));
    }
}

pub mod audio;
pub mod config;
pub mod doctor;
pub mod download;
pub mod list_formats;

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use serde::Deserialize;

/// FTP account for one roaming hub, keyed by the hub name the catalogue
/// reports.
#[derive(Debug, Clone, Deserialize)]
pub struct FtpSettings {
    pub host: String,
    // Defaults to the standard FTP port when unset.
    pub port: Option<u16>,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub directory: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FtpConfigFile {
    #[serde(default)]
    hubs: HashMap<String, FtpSettings>,
}

/// Immutable runtime settings, built once at startup and passed to the
/// service at construction.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub output_dir: PathBuf,
    ftp_hubs: HashMap<String, FtpSettings>,
}

impl Settings {
    /// Reads `TAP3_OUTPUT_DIR` (default: current directory) and, when
    /// `TAP3_FTP_CONFIG` points at a TOML file, the per-hub FTP accounts.
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load .env if present

        let output_dir = env::var("TAP3_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let ftp_hubs = match env::var("TAP3_FTP_CONFIG") {
            Ok(path) => {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read FTP config {path}"))?;
                let config: FtpConfigFile = toml::from_str(&contents)
                    .with_context(|| format!("failed to parse FTP config {path}"))?;
                config.hubs
            }
            Err(_) => HashMap::new(),
        };

        Ok(Settings {
            output_dir,
            ftp_hubs,
        })
    }

    pub fn with_output_dir(output_dir: PathBuf) -> Self {
        Settings {
            output_dir,
            ftp_hubs: HashMap::new(),
        }
    }

    /// FTP settings for a roaming hub; `None` means the RAP file stays
    /// local.
    pub fn ftp_for_hub(&self, name: &str) -> Option<&FtpSettings> {
        self.ftp_hubs.get(name)
    }

    pub fn add_ftp_hub(&mut self, name: impl Into<String>, ftp: FtpSettings) {
        self.ftp_hubs.insert(name.into(), ftp);
    }
}

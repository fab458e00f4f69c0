// src/config.rs
//! Runtime configuration, optionally layered from `sociogram.toml`.
//!
//! The defaults point at the bundled `data/` files, so the tool runs with no
//! config at all. A local `sociogram.toml` can repoint any of the three data
//! files through a `[data]` table; command-line flags override both.
//! A malformed config file is reported and ignored rather than aborting.

use std::path::PathBuf;

use colored::Colorize;
use serde::Deserialize;

const LOCAL_CONFIG_FILE: &str = "sociogram.toml";

/// Paths to the three data files, as configured under `[data]`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataFiles {
    #[serde(default = "default_graph_file")]
    pub graph: PathBuf,
    #[serde(default = "default_influences_file")]
    pub influences: PathBuf,
    #[serde(default = "default_labels_file")]
    pub labels: PathBuf,
}

impl Default for DataFiles {
    fn default() -> Self {
        Self {
            graph: default_graph_file(),
            influences: default_influences_file(),
            labels: default_labels_file(),
        }
    }
}

fn default_graph_file() -> PathBuf {
    PathBuf::from("data/social-network-proj-graph.txt")
}

fn default_influences_file() -> PathBuf {
    PathBuf::from("data/social-network-proj-Influences.txt")
}

fn default_labels_file() -> PathBuf {
    PathBuf::from("data/social-network-proj-LABELS.txt")
}

/// On-disk shape of `sociogram.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SociogramToml {
    #[serde(default)]
    pub data: DataFiles,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub data: DataFiles,
    pub verbose: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config and layers in `sociogram.toml` if one exists.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::new();
        if let Ok(content) = std::fs::read_to_string(LOCAL_CONFIG_FILE) {
            config.parse_toml(&content);
        }
        config
    }

    /// Applies config file content on top of the current settings.
    pub fn parse_toml(&mut self, content: &str) {
        match toml::from_str::<SociogramToml>(content) {
            Ok(parsed) => self.data = parsed.data,
            Err(e) => {
                eprintln!(
                    "{} ignoring malformed {LOCAL_CONFIG_FILE}: {e}",
                    "warning:".yellow().bold()
                );
            }
        }
    }
}


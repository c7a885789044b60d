use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::resolver::DEFAULT_HOST;

/// Ports tried when neither the command line nor the config file supplies
/// candidates.
pub const DEFAULT_PORTS: &[u16] = &[8080, 8081, 8082, 3000, 3001, 3002, 5000, 5001];

#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub ports: Option<Vec<u16>>,
    pub host: Option<String>,
}

impl Config {
    pub fn load_or_create() -> anyhow::Result<Self> {
        match Self::load() {
            Ok(config) => Ok(config),
            Err(_) => {
                let config = Self::default();
                config.save()?;
                Ok(config)
            }
        }
    }

    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Self::filepath()?)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(Self::filepath()?)
    }

    pub fn filepath() -> anyhow::Result<PathBuf> {
        Ok(dirs::config_dir()
            .ok_or(anyhow!("Failed to locate appropriate config directory"))?
            .join("freeport")
            .join("config.toml"))
    }

    pub(crate) fn load_from<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }

    pub(crate) fn save_to<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let text = toml::to_string(self)?;
        fs::create_dir_all(path.as_ref().parent().unwrap())?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Candidate ports in priority order.
    pub fn candidates(&self) -> Vec<u16> {
        self.ports
            .clone()
            .unwrap_or_else(|| DEFAULT_PORTS.to_vec())
    }

    /// Interface the resolver should probe.
    pub fn host(&self) -> String {
        self.host
            .clone()
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }
}

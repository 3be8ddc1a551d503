use crate::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_ENGINE: &str = "skiplist";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct StoreConfig {
    pub engine: String,
    #[serde(default)]
    pub verbosity: Option<usize>,
}

impl Default for StoreConfig {
    fn default() -> StoreConfig {
        StoreConfig {
            engine: DEFAULT_ENGINE.to_string(),
            verbosity: None,
        }
    }
}

impl StoreConfig {
    pub fn load(path: impl Into<PathBuf>) -> Result<StoreConfig> {
        let path = path.into();
        let value = std::fs::read_to_string(&path)?;
        let config: StoreConfig = serde_json::from_str(&value)?;
        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Writes a fresh config naming `engine` to `path`.
    pub fn new(path: impl Into<PathBuf>, engine: String) -> Result<StoreConfig> {
        let config = StoreConfig {
            engine,
            verbosity: None,
        };
        let value = serde_json::to_string(&config)?;
        let mut f = File::create(path.into())?;
        f.write_all(value.as_bytes())?;
        f.flush()?;
        Ok(config)
    }
}

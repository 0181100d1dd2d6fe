use std::env;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const CONFIG_FILE_NAME: &str = "config.json";

pub const API_URL_ENV: &str = "CASEWATCH_API_URL";
pub const TOKEN_ENV: &str = "CASEWATCH_TOKEN";

/// Stored connection settings (~/.casewatch/config.json). Either field may
/// be absent; `resolve` layers flags and environment on top.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ClientConfig {
    pub api_url: Option<String>,
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn load(base_dir: Option<PathBuf>) -> Result<Self> {
        let path = Self::config_path(base_dir)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let file = File::open(&path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }

    pub fn save(&self, base_dir: Option<PathBuf>) -> Result<()> {
        let path = Self::config_path(base_dir)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }

    fn config_path(base_dir: Option<PathBuf>) -> Result<PathBuf> {
        let dir = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".casewatch")
            }
        };
        Ok(dir.join(CONFIG_FILE_NAME))
    }

    /// Effective (api_url, token). Precedence: explicit flag, then
    /// environment, then the stored config. The URL falls back to the local
    /// default; a missing token is an error since every backend call needs
    /// one.
    pub fn resolve(
        &self,
        api_url_flag: Option<&str>,
        token_flag: Option<&str>,
    ) -> Result<(String, String)> {
        self.resolve_with(
            api_url_flag,
            token_flag,
            env::var(API_URL_ENV).ok(),
            env::var(TOKEN_ENV).ok(),
        )
    }

    // The environment layer is a parameter so tests control it instead of
    // inheriting whatever the test process has set.
    fn resolve_with(
        &self,
        api_url_flag: Option<&str>,
        token_flag: Option<&str>,
        env_api_url: Option<String>,
        env_token: Option<String>,
    ) -> Result<(String, String)> {
        let api_url = api_url_flag
            .map(str::to_string)
            .or(env_api_url)
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let token = token_flag
            .map(str::to_string)
            .or(env_token)
            .or_else(|| self.token.clone())
            .ok_or_else(|| {
                anyhow!("No API token configured. Run `casewatch config set --token <TOKEN>`")
            })?;

        Ok((api_url, token))
    }
}

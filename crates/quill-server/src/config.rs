use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use quill_blog::NewAuthor;
use quill_store::StoreConfig;

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreConfig,
    /// Authors inserted at startup when the `authors` collection is empty.
    /// The blog itself never creates authors.
    pub authors: Vec<NewAuthor>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().expect("valid literal"),
            store: StoreConfig::default(),
            authors: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file. Absent keys fall back to the
    /// defaults.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// The effective configuration rendered as TOML.
    pub fn to_toml(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }
}

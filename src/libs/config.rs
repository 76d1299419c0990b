//! Application configuration: which stored user the CLI acts on.
//!
//! The configuration lives as a small JSON file in the platform data
//! directory. Mutating commands load the current user from the store,
//! drive the tracker, and persist the updated user afterwards; the config
//! only remembers which user that is.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Id of the user tracking commands act on.
    pub current_user_id: Option<i64>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when it does
    /// not exist yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// The selected user id, or an error telling the user to run init.
    pub fn current_user_id(&self) -> Result<i64> {
        self.current_user_id.ok_or_else(|| msg_error_anyhow!(Message::NoCurrentUser))
    }
}

//! Durable key-value storage - preferences and match history
//!
//! A small async JSON store over two files in a caller-supplied directory:
//! `preferences.json` (last used mode, Mexicano limit) and `matches.json`
//! (record list, newest first, capped at fifty). Reads never fail: a missing
//! or corrupt file degrades to defaults so a damaged history can never take
//! the scoreboard down. Writes surface [`StoreError`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use padel_score_engine::MatchRecord;
use padel_score_types::{GameMode, DEFAULT_MEXICANO_LIMIT, MAX_STORED_MATCHES};

const PREFERENCES_FILE: &str = "preferences.json";
const MATCHES_FILE: &str = "matches.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Preferences {
    last_game_mode: String,
    mexicano_limit: u16,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            last_game_mode: GameMode::Vinnarbana.as_str().to_string(),
            mexicano_limit: DEFAULT_MEXICANO_LIMIT,
        }
    }
}

/// File-backed store; cheap to clone the handle, no open resources held
#[derive(Debug, Clone)]
pub struct ScoreStore {
    dir: PathBuf,
}

impl ScoreStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn last_game_mode(&self) -> GameMode {
        let prefs = self.read_preferences().await;
        GameMode::from_str(&prefs.last_game_mode).unwrap_or(GameMode::Vinnarbana)
    }

    pub async fn save_last_game_mode(&self, mode: GameMode) -> Result<(), StoreError> {
        let mut prefs = self.read_preferences().await;
        prefs.last_game_mode = mode.as_str().to_string();
        self.write_json(PREFERENCES_FILE, &prefs).await
    }

    pub async fn mexicano_limit(&self) -> u16 {
        self.read_preferences().await.mexicano_limit
    }

    pub async fn save_mexicano_limit(&self, limit: u16) -> Result<(), StoreError> {
        let mut prefs = self.read_preferences().await;
        prefs.mexicano_limit = limit;
        self.write_json(PREFERENCES_FILE, &prefs).await
    }

    /// All stored records, newest first; empty on missing or corrupt data
    pub async fn match_records(&self) -> Vec<MatchRecord> {
        self.read_records().await
    }

    pub async fn record_by_id(&self, id: &str) -> Option<MatchRecord> {
        self.read_records().await.into_iter().find(|r| r.id == id)
    }

    /// Insert a record, keeping the list newest-first and capped
    pub async fn save_match_record(&self, record: MatchRecord) -> Result<(), StoreError> {
        let mut records = self.read_records().await;
        records.push(record);
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(MAX_STORED_MATCHES);
        self.write_json(MATCHES_FILE, &records).await
    }

    pub async fn delete_match_record(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.read_records().await;
        records.retain(|r| r.id != id);
        self.write_json(MATCHES_FILE, &records).await
    }

    pub async fn clear_match_records(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(self.dir.join(MATCHES_FILE)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    async fn read_preferences(&self) -> Preferences {
        self.read_json(PREFERENCES_FILE).await.unwrap_or_default()
    }

    async fn read_records(&self) -> Vec<MatchRecord> {
        self.read_json(MATCHES_FILE).await.unwrap_or_default()
    }

    /// Read and parse a JSON file; `None` (with a warning for anything but a
    /// missing file) instead of an error
    async fn read_json<T: for<'de> Deserialize<'de>>(&self, name: &str) -> Option<T> {
        let path = self.dir.join(name);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                warn!("failed to read {}: {}", path.display(), err);
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("discarding corrupt {}: {}", path.display(), err);
                None
            }
        }
    }

    async fn write_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let bytes = serde_json::to_vec_pretty(value)?;
        tokio::fs::write(self.dir.join(name), bytes).await?;
        Ok(())
    }
}

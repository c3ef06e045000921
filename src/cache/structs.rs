use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use urlencoding::encode;

/// File-based cache for the last successfully ranked leaderboard per
/// tournament. Only the fallback path reads it; ranking itself never
/// reuses a previous result.
pub struct Cache {
    cache_dir: PathBuf,
}

impl Cache {
    /// Create a new cache instance
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();

        fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;

        Ok(Self { cache_dir })
    }

    /// Save data to cache
    pub fn save<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let file_path = self.build_path(key);

        let json = serde_json::to_string_pretty(data).context("Failed to serialize data")?;

        fs::write(&file_path, json).context("Failed to write cache file")?;

        info!("Saved data to cache: {}", file_path.display());
        Ok(())
    }

    /// Load data from cache
    pub fn load<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        let file_path = self.build_path(key);

        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path).context("Failed to read cache file")?;

        let data = serde_json::from_str(&json).context("Failed to deserialize cache data")?;

        info!("Loaded data from cache: {}", file_path.display());
        Ok(Some(data))
    }

    /// Check if cached data exists
    pub fn exists(&self, key: &str) -> bool {
        self.build_path(key).exists()
    }

    /// Clear all cached data
    pub fn clear(&self) -> Result<()> {
        fs::remove_dir_all(&self.cache_dir).context("Failed to clear cache")?;

        fs::create_dir_all(&self.cache_dir).context("Failed to recreate cache directory")?;

        info!("Cleared cache directory");
        Ok(())
    }

    // Keys come from upstream identifiers; percent-encoding keeps path
    // separators out of the filename so every entry stays in cache_dir.
    fn build_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", encode(key)))
    }
}

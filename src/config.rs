// ⚙️ Runtime Configuration
// File locations, overridable through the environment

use std::env;
use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "inventory.db";
pub const DEFAULT_INVENTORY_CSV: &str = "inventory.csv";
pub const DEFAULT_BACKUP_CSV: &str = "backup.csv";

pub const ENV_DB_PATH: &str = "INVENTORY_DB";
pub const ENV_INVENTORY_CSV: &str = "INVENTORY_CSV";
pub const ENV_BACKUP_CSV: &str = "INVENTORY_BACKUP";

/// Where the tracker reads and writes its files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file
    pub db_path: PathBuf,
    /// CSV imported on every startup
    pub inventory_csv: PathBuf,
    /// CSV written by the backup command
    pub backup_csv: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            inventory_csv: PathBuf::from(DEFAULT_INVENTORY_CSV),
            backup_csv: PathBuf::from(DEFAULT_BACKUP_CSV),
        }
    }
}

impl Config {
    /// Defaults, with each path replaced by its environment variable when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let path_or = |key: &str, default: PathBuf| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(default)
        };

        let defaults = Config::default();
        Config {
            db_path: path_or(ENV_DB_PATH, defaults.db_path),
            inventory_csv: path_or(ENV_INVENTORY_CSV, defaults.inventory_csv),
            backup_csv: path_or(ENV_BACKUP_CSV, defaults.backup_csv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_without_env() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
        assert_eq!(config.inventory_csv, PathBuf::from("inventory.csv"));
        assert_eq!(config.backup_csv, PathBuf::from("backup.csv"));
    }

    #[test]
    fn test_env_overrides_and_blank_values() {
        let vars: HashMap<&str, &str> = [
            (ENV_DB_PATH, "/tmp/stock.db"),
            (ENV_INVENTORY_CSV, "   "),
            (ENV_BACKUP_CSV, "out/backup-2020.csv"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.db_path, PathBuf::from("/tmp/stock.db"));
        assert_eq!(config.inventory_csv, PathBuf::from(DEFAULT_INVENTORY_CSV));
        assert_eq!(config.backup_csv, PathBuf::from("out/backup-2020.csv"));
    }
}

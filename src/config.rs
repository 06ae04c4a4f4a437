use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Persisted CLI preferences. Lives at `~/.lexi/config.json` and can be
/// overridden per-invocation with `LEXI_OUTPUT` / `LEXI_HIDE_COMMENTS`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Default output format for `scan`: "table" or "json".
    pub output: String,
    /// When true, `scan` omits comment tokens from the table.
    #[serde(default)]
    pub hide_comments: bool,
}

impl Default for Config {
    fn default() -> Self {
        let output = env::var("LEXI_OUTPUT").unwrap_or_else(|_| String::from("table"));
        let hide_comments = env::var("LEXI_HIDE_COMMENTS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Config {
            output,
            hide_comments,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            let config = Config::default();
            config.save().unwrap_or_default();
            return config;
        }

        match fs::read_to_string(&config_path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Config::default(),
        }
    }

    pub fn save(&self) -> io::Result<()> {
        let config_path = Self::get_config_path();
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, contents)
    }

    pub fn get_config_path() -> PathBuf {
        let base_dir = if cfg!(windows) {
            PathBuf::from(env::var("USERPROFILE").unwrap_or_else(|_| String::from(".")))
        } else {
            PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from(".")))
        };
        base_dir.join(".lexi").join("config.json")
    }
}

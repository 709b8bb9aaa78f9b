//! Start-up configuration read from the environment.

use std::env;

use crate::types::PlayerName;

/// Runtime configuration shared by both binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name shown in the scoreboard's name column.
    pub player: PlayerName,
    /// JSON-lines roll log; disabled when `None`.
    pub log_path: Option<String>,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player: PlayerName::default(),
            log_path: None,
            color: true,
        }
    }
}

impl Config {
    /// Create from environment variables
    /// (`BOWLING_PLAYER`, `BOWLING_LOG_PATH`, `BOWLING_COLOR`).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] but with an explicit variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let player = match lookup("BOWLING_PLAYER").map(|s| s.trim().to_string()) {
            Some(s) if !s.is_empty() => match PlayerName::parse(&s) {
                Ok(name) => name,
                Err(e) => {
                    eprintln!(
                        "[Bowling] Ignoring BOWLING_PLAYER ({}), using {}",
                        e, defaults.player
                    );
                    defaults.player
                }
            },
            _ => defaults.player,
        };

        let log_path = lookup("BOWLING_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let color = lookup("BOWLING_COLOR")
            .map(|v| {
                let v = v.trim().to_lowercase();
                !(v == "0" || v == "false")
            })
            .unwrap_or(defaults.color);

        Self {
            player,
            log_path,
            color,
        }
    }
}

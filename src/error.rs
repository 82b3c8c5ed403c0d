//! Error type shared by configuration, generation and spawning.

use std::path::PathBuf;

/// Everything that can go wrong before a dungeon or session is handed out.
#[derive(thiserror::Error, Debug)]
pub enum RoguelikeError {
    /// A configuration value is out of range; raised before generation starts.
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Room has no corridor path to the rest of the dungeon and the
    /// fallback policy forbids an off-axis corridor.
    #[error("room {room} cannot be connected to any other room group")]
    UnreachableRoom { room: usize },

    /// Spawn sampling ran out of attempts without finding a free position.
    #[error("no collision-free spawn point found after {attempts} attempts")]
    NoSpawnPoint { attempts: u32 },

    #[error("failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, RoguelikeError>;

impl RoguelikeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        RoguelikeError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

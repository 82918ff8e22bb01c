use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid hex color `{0}` (expected #RRGGBB)")]
    InvalidHex(String),

    #[error("{field} opacity {value} is outside 0.0..=1.0")]
    InvalidOpacity { field: &'static str, value: f64 },

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error("theme `{0}` is defined more than once")]
    DuplicateTheme(String),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    ConfigSerialize(#[from] toml::ser::Error),
}

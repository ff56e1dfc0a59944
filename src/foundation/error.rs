/// Result alias for fallible configuration calls.
pub type BadgeResult<T> = Result<T, BadgeError>;

/// Errors raised while loading badge configuration.
///
/// Lifecycle operations never fail; they degrade to no-ops instead.
#[derive(thiserror::Error, Debug)]
pub enum BadgeError {
    /// Invalid configuration value or name.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON could not be read or written.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl BadgeError {
    /// Build [`BadgeError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build [`BadgeError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BadgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

// src/error.rs
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    InvalidId(String),
    UnknownValueType(String),
    Io(String),
    Deserialize(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId(id) => write!(f, "Invalid asset definition id: {}", id),
            Self::UnknownValueType(kind) => write!(f, "Unknown asset value type: {}", kind),
            Self::Io(msg) => write!(f, "I/O error: {}", msg),
            Self::Deserialize(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<serde_json::Error> for AssetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialize(err.to_string())
    }
}

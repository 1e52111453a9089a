// src/value_type.rs
use crate::AssetError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value kinds an asset definition can name.
///
/// Definitions keep their value type as free text; this enum is only used
/// to classify that text on request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AssetValueType {
    Quantity,
    BigQuantity,
    Fixed,
    Numeric,
    Store,
}

impl AssetValueType {
    pub const ALL: [AssetValueType; 5] = [
        AssetValueType::Quantity,
        AssetValueType::BigQuantity,
        AssetValueType::Fixed,
        AssetValueType::Numeric,
        AssetValueType::Store,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetValueType::Quantity => "Quantity",
            AssetValueType::BigQuantity => "BigQuantity",
            AssetValueType::Fixed => "Fixed",
            AssetValueType::Numeric => "Numeric",
            AssetValueType::Store => "Store",
        }
    }

    /// Store assets hold key/value metadata rather than an amount.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, AssetValueType::Store)
    }
}

impl fmt::Display for AssetValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetValueType {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AssetError::UnknownValueType(s.to_string()))
    }
}

// src/asset.rs
use crate::{AssetDefinition, AssetDefinitionId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An asset definition paired with a held quantity.
///
/// The value is not range-checked and is not interpreted through the
/// definition's value type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    #[serde(flatten)]
    definition: AssetDefinition,
    value: f64,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        domain: impl Into<String>,
        value_type: impl Into<String>,
        value: f64,
    ) -> Self {
        Self::from_definition(AssetDefinition::new(name, domain, value_type), value)
    }

    pub fn from_definition(definition: AssetDefinition, value: f64) -> Self {
        Self { definition, value }
    }

    pub fn definition(&self) -> &AssetDefinition {
        &self.definition
    }

    pub fn definition_id(&self) -> AssetDefinitionId {
        self.definition.definition_id()
    }

    pub fn get_id(&self) -> String {
        self.definition.get_id()
    }

    pub fn get_value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for Asset {
    // `{:?}` keeps the fractional part of integral values: 100.0, not 100.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.definition, self.value)
    }
}

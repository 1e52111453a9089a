// src/definition.rs
use crate::{AssetError, AssetValueType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ID_SEPARATOR: char = '#';

/// Identity of an asset kind within a domain.
///
/// Fields are stored exactly as given. Nothing is trimmed, lowercased or
/// checked against the known value types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetDefinition {
    name: String,
    domain: String,
    value_type: String,
}

impl AssetDefinition {
    pub fn new(
        name: impl Into<String>,
        domain: impl Into<String>,
        value_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            value_type: value_type.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn value_type(&self) -> &str {
        &self.value_type
    }

    /// `name#domain`, rebuilt on every call.
    pub fn get_id(&self) -> String {
        format!("{}{}{}", self.name, ID_SEPARATOR, self.domain)
    }

    pub fn definition_id(&self) -> AssetDefinitionId {
        AssetDefinitionId::from(self)
    }

    /// Classify the stored value type. Unknown text yields `None`.
    pub fn known_value_type(&self) -> Option<AssetValueType> {
        self.value_type.parse().ok()
    }
}

impl fmt::Display for AssetDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, ID_SEPARATOR, self.domain)
    }
}

/// The `name#domain` pair, split back into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetDefinitionId {
    pub name: String,
    pub domain: String,
}

impl AssetDefinitionId {
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
        }
    }

    pub fn matches(&self, definition: &AssetDefinition) -> bool {
        self.name == definition.name && self.domain == definition.domain
    }
}

impl From<&AssetDefinition> for AssetDefinitionId {
    fn from(definition: &AssetDefinition) -> Self {
        Self::new(definition.name.clone(), definition.domain.clone())
    }
}

impl fmt::Display for AssetDefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, ID_SEPARATOR, self.domain)
    }
}

impl FromStr for AssetDefinitionId {
    type Err = AssetError;

    /// Exactly one `#` is required; either side may be empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(ID_SEPARATOR) {
            Some((name, domain)) if !domain.contains(ID_SEPARATOR) => Ok(Self::new(name, domain)),
            _ => Err(AssetError::InvalidId(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_id() {
        let gold = AssetDefinition::new("gold", "domain", "Quantity");
        assert_eq!(gold.get_id(), "gold#domain");
        assert_eq!(gold.get_id(), gold.get_id());
    }

    #[test]
    fn test_display_matches_id() {
        let rose = AssetDefinition::new("rose", "wonderland", "Numeric");
        assert_eq!(rose.to_string(), rose.get_id());
    }

    #[test]
    fn test_fields_stored_verbatim() {
        let def = AssetDefinition::new(" Gold ", "DOMAIN", "not-a-kind");
        assert_eq!(def.name(), " Gold ");
        assert_eq!(def.domain(), "DOMAIN");
        assert_eq!(def.value_type(), "not-a-kind");
        assert_eq!(def.get_id(), " Gold #DOMAIN");
        assert_eq!(def.known_value_type(), None);
    }

    #[test]
    fn test_empty_fields_are_accepted() {
        let def = AssetDefinition::new("", "", "");
        assert_eq!(def.get_id(), "#");
    }

    #[test]
    fn test_known_value_type() {
        let def = AssetDefinition::new("gold", "domain", "Quantity");
        assert_eq!(def.known_value_type(), Some(AssetValueType::Quantity));
    }

    #[test]
    fn test_parse_id() {
        let id: AssetDefinitionId = "rose#wonderland".parse().unwrap();
        assert_eq!(id, AssetDefinitionId::new("rose", "wonderland"));
        assert_eq!(id.to_string(), "rose#wonderland");

        let empty: AssetDefinitionId = "#".parse().unwrap();
        assert_eq!(empty, AssetDefinitionId::new("", ""));
    }

    #[test]
    fn test_parse_id_rejects_bad_separators() {
        assert_eq!(
            "rose".parse::<AssetDefinitionId>(),
            Err(AssetError::InvalidId("rose".to_string()))
        );
        assert!("rose#wonder#land".parse::<AssetDefinitionId>().is_err());
    }

    #[test]
    fn test_definition_id_matches() {
        let def = AssetDefinition::new("cabbage", "garden_of_live_flowers", "Numeric");
        let id = def.definition_id();
        assert!(id.matches(&def));
        assert_eq!(id.to_string(), def.get_id());
        assert!(!AssetDefinitionId::new("cabbage", "wonderland").matches(&def));
    }
}

// src/fixtures.rs
use crate::{Asset, AssetDefinition, AssetDefinitionId, AssetError, AssetValueType, FixtureConfig};
use metrics::counter;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Definitions and held assets used by a test run.
///
/// Entries are kept in the order given, duplicates included. Lookups return
/// the first match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FixtureSet {
    #[serde(default)]
    definitions: Vec<AssetDefinition>,
    #[serde(default)]
    assets: Vec<Asset>,
}

impl FixtureSet {
    pub fn new(definitions: Vec<AssetDefinition>, assets: Vec<Asset>) -> Self {
        Self {
            definitions,
            assets,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, AssetError> {
        let set: FixtureSet = serde_json::from_str(json)?;
        set.record_load("json");
        Ok(set)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AssetError::Io(format!("{}: {}", path.display(), e)))?;
        let set: FixtureSet = serde_json::from_str(&raw)
            .map_err(|e| AssetError::Deserialize(format!("{}: {}", path.display(), e)))?;
        set.record_load(&path.display().to_string());
        Ok(set)
    }

    pub fn load(config: &FixtureConfig) -> Result<Self, AssetError> {
        match &config.path {
            Some(path) => Self::from_path(path),
            None => {
                let set = Self::default_genesis();
                set.record_load("default genesis");
                Ok(set)
            }
        }
    }

    /// `rose#wonderland` and `cabbage#garden_of_live_flowers` holding 13 and 44.
    pub fn default_genesis() -> Self {
        let numeric = AssetValueType::Numeric.as_str();
        let rose = AssetDefinition::new("rose", "wonderland", numeric);
        let cabbage = AssetDefinition::new("cabbage", "garden_of_live_flowers", numeric);

        Self::new(
            vec![rose.clone(), cabbage.clone()],
            vec![
                Asset::from_definition(rose, 13.0),
                Asset::from_definition(cabbage, 44.0),
            ],
        )
    }

    /// Definitions `asset_{a}#domain_{d}` for every domain/asset pair, no holdings.
    pub fn synthetic(domains: usize, assets_per_domain: usize) -> Self {
        let numeric = AssetValueType::Numeric.as_str();
        let definitions = (0..domains)
            .flat_map(|domain| {
                (0..assets_per_domain).map(move |asset| {
                    AssetDefinition::new(
                        format!("asset_{asset}"),
                        format!("domain_{domain}"),
                        numeric,
                    )
                })
            })
            .collect();

        Self::new(definitions, Vec::new())
    }

    pub fn definitions(&self) -> &[AssetDefinition] {
        &self.definitions
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn definition(&self, id: &AssetDefinitionId) -> Option<&AssetDefinition> {
        self.definitions.iter().find(|d| id.matches(d))
    }

    pub fn assets_of<'a>(&'a self, id: &'a AssetDefinitionId) -> impl Iterator<Item = &'a Asset> {
        self.assets.iter().filter(move |a| id.matches(a.definition()))
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.assets.is_empty()
    }

    fn record_load(&self, source: &str) {
        counter!("fixtures.definitions.loaded").increment(self.definitions.len() as u64);
        counter!("fixtures.assets.loaded").increment(self.assets.len() as u64);
        debug!(
            source,
            definitions = self.definitions.len(),
            assets = self.assets.len(),
            "loaded asset fixtures"
        );

        for asset in &self.assets {
            if self.definition(&asset.definition_id()).is_none() {
                warn!(asset = %asset, "asset fixture has no matching definition");
            }
        }
    }
}

//! Asset fixture records for ledger client tests.
//!
//! An [`AssetDefinition`] names an asset kind inside a domain and derives
//! the identifier `name#domain`. An [`Asset`] pairs a definition with a held
//! quantity and displays as `name#domain:value`.
//!
//! ```rust
//! use ledger_asset_fixtures::{Asset, AssetDefinition};
//!
//! let gold = AssetDefinition::new("gold", "domain", "Quantity");
//! assert_eq!(gold.get_id(), "gold#domain");
//!
//! let held = Asset::new("gold", "domain", "Quantity", 100.0);
//! assert_eq!(held.to_string(), "gold#domain:100.0");
//! ```
//!
//! Records are never validated. Empty names, unknown value types and
//! negative values all pass through into the derived strings.

pub mod asset;
pub mod config;
pub mod definition;
pub mod error;
pub mod fixtures;
pub mod value_type;

pub use asset::Asset;
pub use config::FixtureConfig;
pub use definition::{AssetDefinition, AssetDefinitionId};
pub use error::AssetError;
pub use fixtures::FixtureSet;
pub use value_type::AssetValueType;

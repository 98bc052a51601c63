//! List configuration.
//!
//! A config can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "id_scheme": "timestamp",
//!   "max_quantity": 20,
//!   "seed": [
//!     { "id": 1, "description": "Passports", "quantity": 2 }
//!   ]
//! }
//! ```
//!
//! Every field is optional and falls back to [`ListConfig::default`].

use crate::error::{ListError, Result};
use crate::ids::IdScheme;
use crate::list::validate_item;
use crate::types::{Item, ItemId};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest quantity offered by the add form unless configured otherwise.
pub const DEFAULT_MAX_QUANTITY: u32 = 20;

/// Packing list configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Items the list starts with, in order.
    pub seed: Vec<Item>,

    /// How new item ids are generated.
    pub id_scheme: IdScheme,

    /// Upper bound of the add form's quantity selector.
    pub max_quantity: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            seed: Vec::new(),
            id_scheme: IdScheme::default(),
            max_quantity: DEFAULT_MAX_QUANTITY,
        }
    }
}

impl ListConfig {
    /// Config starting from the given items.
    pub fn with_seed(seed: Vec<Item>) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Parse a JSON config and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ListConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check the seed items as if each were added in order.
    pub fn validate(&self) -> Result<()> {
        if self.max_quantity == 0 {
            return Err(ListError::InvalidConfig(
                "max_quantity must be at least 1".to_string(),
            ));
        }

        for (index, item) in self.seed.iter().enumerate() {
            validate_item(&self.seed[..index], item).map_err(|e| {
                ListError::InvalidConfig(format!("seed item {} ({}): {}", index, item.id, e))
            })?;
        }
        Ok(())
    }
}

/// The three items the demo list ships with.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new(ItemId(1), "Passports", 2),
        Item::new(ItemId(2), "Socks", 12).with_packed(true),
        Item::new(ItemId(3), "Charger", 1),
    ]
}

use crate::error::{Result, VendingError};
use serde::{Deserialize, Serialize};

/// A priced item in the catalog.
///
/// The name doubles as the primary key; there is no separate surrogate id.
/// Prices are expressed in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: i64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Checks the fields that must be present before the product is stored.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(VendingError::Validation(
                "Product name is required".to_string(),
            ));
        }
        Ok(())
    }
}

use crate::domain::coin::Denominations;
use crate::domain::dispenser::{self, Purchase};
use crate::domain::ports::CatalogStoreBox;
use crate::domain::product::Product;
use crate::error::{Result, VendingError};
use tracing::{info, instrument};

/// The entry point for catalog management and purchases.
///
/// `VendingMachine` owns the catalog store and the accepted coin set. Each
/// purchase runs the validator and the greedy dispenser over a snapshot of
/// the catalog; stock is never decremented.
pub struct VendingMachine {
    catalog: CatalogStoreBox,
    denominations: Denominations,
}

impl VendingMachine {
    /// Creates a machine over `catalog` accepting the given coin values.
    pub fn new(catalog: CatalogStoreBox, denominations: Denominations) -> Self {
        Self {
            catalog,
            denominations,
        }
    }

    /// Adds a product. Fails with `DuplicateKey` if the name is taken.
    #[instrument(skip(self), fields(name = %product.name))]
    pub async fn create_product(&self, product: Product) -> Result<Product> {
        product.validate()?;
        if !self.catalog.insert_if_absent(product.clone()).await? {
            return Err(VendingError::DuplicateKey(product.name));
        }
        info!(price = product.price, "product created");
        Ok(product)
    }

    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.catalog.find_all().await
    }

    pub async fn get_product(&self, name: &str) -> Result<Product> {
        self.catalog
            .find_by_key(name)
            .await?
            .ok_or_else(|| VendingError::NotFound(name.to_string()))
    }

    /// Replaces the whole record stored under `product.name`.
    #[instrument(skip(self), fields(name = %product.name))]
    pub async fn update_product(&self, product: Product) -> Result<Product> {
        product.validate()?;
        if !self.catalog.replace_if_present(product.clone()).await? {
            return Err(VendingError::NotFound(product.name));
        }
        info!(price = product.price, "product updated");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, name: &str) -> Result<()> {
        if !self.catalog.exists_by_key(name).await? {
            return Err(VendingError::NotFound(name.to_string()));
        }
        self.catalog.delete_by_key(name).await?;
        info!("product deleted");
        Ok(())
    }

    /// Validates the inserted coins and spends them on the current catalog.
    #[instrument(skip(self))]
    pub async fn buy(&self, coins: &[i64]) -> Result<Purchase> {
        let total = self.denominations.validate(coins)?;
        let snapshot = self.catalog.find_all().await?;
        let purchase = dispenser::dispense(total, &snapshot)?;
        info!(
            total,
            spent = purchase.spent,
            change = purchase.change,
            "purchase completed"
        );
        Ok(purchase)
    }
}

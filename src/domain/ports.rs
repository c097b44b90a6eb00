use super::product::Product;
use crate::error::Result;
use async_trait::async_trait;

/// Storage for the product catalog, keyed by product name.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>>;
    async fn find_by_key(&self, name: &str) -> Result<Option<Product>>;
    async fn exists_by_key(&self, name: &str) -> Result<bool>;
    async fn save(&self, product: Product) -> Result<Product>;
    async fn delete_by_key(&self, name: &str) -> Result<()>;

    /// Stores `product` unless its name is taken. Returns `false` when it was.
    ///
    /// The default probes then writes; adapters that can hold a lock across
    /// both steps should override it.
    async fn insert_if_absent(&self, product: Product) -> Result<bool> {
        if self.exists_by_key(&product.name).await? {
            return Ok(false);
        }
        self.save(product).await?;
        Ok(true)
    }

    /// Replaces the stored record with the same name. Returns `false` when absent.
    async fn replace_if_present(&self, product: Product) -> Result<bool> {
        if !self.exists_by_key(&product.name).await? {
            return Ok(false);
        }
        self.save(product).await?;
        Ok(true)
    }
}

pub type CatalogStoreBox = Box<dyn CatalogStore>;

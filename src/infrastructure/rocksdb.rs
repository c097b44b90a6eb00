use crate::domain::ports::CatalogStore;
use crate::domain::product::Product;
use crate::error::{Result, VendingError};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing catalog products.
pub const CF_PRODUCTS: &str = "products";

/// A persistent catalog implementation using RocksDB.
///
/// Products are stored in their own column family, keyed by the UTF-8 bytes
/// of the product name with the JSON record as value. `find_all` therefore
/// returns products in byte order of their names.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDbCatalogStore {
    db: Arc<DB>,
}

impl RocksDbCatalogStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "products" column family exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_products = ColumnFamilyDescriptor::new(CF_PRODUCTS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_products])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn products_cf(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_PRODUCTS).ok_or_else(|| {
            VendingError::Internal(Box::new(std::io::Error::other(
                "Products column family not found",
            )))
        })
    }
}

#[async_trait]
impl CatalogStore for RocksDbCatalogStore {
    async fn find_all(&self) -> Result<Vec<Product>> {
        let cf = self.products_cf()?;

        let mut products = Vec::new();
        for item in self.db.iterator_cf(&cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            products.push(serde_json::from_slice(&value)?);
        }
        Ok(products)
    }

    async fn find_by_key(&self, name: &str) -> Result<Option<Product>> {
        let cf = self.products_cf()?;
        match self.db.get_cf(&cf, name.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_key(&self, name: &str) -> Result<bool> {
        let cf = self.products_cf()?;
        // Just check if the key exists without copying the value out
        Ok(self.db.get_pinned_cf(&cf, name.as_bytes())?.is_some())
    }

    async fn save(&self, product: Product) -> Result<Product> {
        let cf = self.products_cf()?;
        let value = serde_json::to_vec(&product)?;
        self.db.put_cf(&cf, product.name.as_bytes(), value)?;
        Ok(product)
    }

    async fn delete_by_key(&self, name: &str) -> Result<()> {
        let cf = self.products_cf()?;
        self.db.delete_cf(&cf, name.as_bytes())?;
        Ok(())
    }
}

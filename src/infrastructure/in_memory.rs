use crate::domain::ports::CatalogStore;
use crate::domain::product::Product;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory product catalog.
///
/// Products are kept in insertion order, so `find_all` returns them the way
/// they were created and `save` on an existing name replaces it in place.
#[derive(Default, Clone)]
pub struct InMemoryCatalogStore {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryCatalogStore {
    /// Creates a new, empty in-memory catalog.
    pub fn new() -> Self {
        Self::default()
    }
}

fn position(products: &[Product], name: &str) -> Option<usize> {
    products.iter().position(|p| p.name == name)
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn find_all(&self) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.clone())
    }

    async fn find_by_key(&self, name: &str) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(position(&products, name).map(|i| products[i].clone()))
    }

    async fn exists_by_key(&self, name: &str) -> Result<bool> {
        let products = self.products.read().await;
        Ok(position(&products, name).is_some())
    }

    async fn save(&self, product: Product) -> Result<Product> {
        let mut products = self.products.write().await;
        match position(&products, &product.name) {
            Some(i) => products[i] = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(product)
    }

    async fn delete_by_key(&self, name: &str) -> Result<()> {
        let mut products = self.products.write().await;
        if let Some(i) = position(&products, name) {
            products.remove(i);
        }
        Ok(())
    }

    async fn insert_if_absent(&self, product: Product) -> Result<bool> {
        let mut products = self.products.write().await;
        if position(&products, &product.name).is_some() {
            return Ok(false);
        }
        products.push(product);
        Ok(true)
    }

    async fn replace_if_present(&self, product: Product) -> Result<bool> {
        let mut products = self.products.write().await;
        match position(&products, &product.name) {
            Some(i) => {
                products[i] = product;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_catalog_store() {
        let store = InMemoryCatalogStore::new();
        let aqua = Product::new("Aqua", 2000);

        store.save(aqua.clone()).await.unwrap();
        let retrieved = store.find_by_key("Aqua").await.unwrap().unwrap();
        assert_eq!(retrieved, aqua);

        assert!(store.exists_by_key("Aqua").await.unwrap());
        assert!(store.find_by_key("Cola").await.unwrap().is_none());
        assert!(!store.exists_by_key("Cola").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = InMemoryCatalogStore::new();
        store.save(Product::new("Sosro", 5000)).await.unwrap();
        store.save(Product::new("Aqua", 2000)).await.unwrap();
        store.save(Product::new("Sosro", 5500)).await.unwrap();

        let all = store.find_all().await.unwrap();
        assert_eq!(
            all,
            vec![Product::new("Sosro", 5500), Product::new("Aqua", 2000)]
        );
    }

    #[tokio::test]
    async fn test_delete_by_key() {
        let store = InMemoryCatalogStore::new();
        store.save(Product::new("Aqua", 2000)).await.unwrap();
        store.delete_by_key("Aqua").await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());

        // Deleting a missing key is not the store's concern.
        store.delete_by_key("Aqua").await.unwrap();
    }

    #[tokio::test]
    async fn test_conditional_writes() {
        let store = InMemoryCatalogStore::new();
        assert!(store.insert_if_absent(Product::new("Aqua", 2000)).await.unwrap());
        assert!(!store.insert_if_absent(Product::new("Aqua", 3000)).await.unwrap());
        assert_eq!(store.find_by_key("Aqua").await.unwrap().unwrap().price, 2000);

        assert!(store.replace_if_present(Product::new("Aqua", 2500)).await.unwrap());
        assert!(!store.replace_if_present(Product::new("Cola", 7000)).await.unwrap());
        assert_eq!(store.find_by_key("Aqua").await.unwrap().unwrap().price, 2500);
        assert!(!store.exists_by_key("Cola").await.unwrap());
    }
}

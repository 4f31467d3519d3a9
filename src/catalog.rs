use crate::db::KeyValueStore;
use crate::error::CatalogResult;
use crate::models::{CategoryStats, DashboardStats, NewProduct, Product, ProductPatch};
use crate::seed::seed_products;
use crate::stats;

pub const DEFAULT_STORAGE_KEY: &str = "montela-products";

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Owner of the product collection. The whole catalog lives under one key
/// as a JSON array; every write replaces it.
pub struct CatalogStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CatalogStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        CatalogStore {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Every product in storage order. Seeds the store when no record
    /// exists; falls back to the seed set when the record can't be read.
    pub fn list_all(&self) -> Vec<Product> {
        match self.load() {
            Ok(Some(products)) => products,
            Ok(None) => {
                let products = seed_products();
                if let Err(e) = self.persist(&products) {
                    tracing::warn!(error = %e, key = %self.key, "failed to write seed catalog");
                } else {
                    tracing::info!(count = products.len(), key = %self.key, "seeded catalog");
                }
                products
            }
            Err(e) => {
                tracing::error!(error = %e, key = %self.key, "error getting products, using seed catalog");
                seed_products()
            }
        }
    }

    pub fn list_published(&self) -> Vec<Product> {
        self.list_all()
            .into_iter()
            .filter(|p| p.is_published)
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Product> {
        self.list_all().into_iter().find(|p| p.id == id)
    }

    pub fn create(&self, data: NewProduct) -> CatalogResult<Product> {
        let mut products = self.list_all();
        let product = Product::from_new(next_id(&products), data, &today());

        products.push(product.clone());
        self.persist(&products)?;

        tracing::info!(id = %product.id, name = %product.name, "created product");
        Ok(product)
    }

    /// Merges `patch` onto the product with `id`. The full collection is
    /// written back even when nothing matched; the result is `None` then.
    pub fn update(&self, id: &str, patch: ProductPatch) -> CatalogResult<Option<Product>> {
        let mut products = self.list_all();
        let today = today();

        let mut updated = None;
        for product in products.iter_mut().filter(|p| p.id == id) {
            product.apply(patch.clone(), &today);
            updated = Some(product.clone());
        }

        self.persist(&products)?;

        match &updated {
            Some(_) => tracing::info!(id, "updated product"),
            None => tracing::debug!(id, "update matched no product"),
        }
        Ok(updated)
    }

    /// Removes the product with `id`. Succeeds whether or not it existed.
    pub fn delete(&self, id: &str) -> CatalogResult<()> {
        let products: Vec<Product> = self
            .list_all()
            .into_iter()
            .filter(|p| p.id != id)
            .collect();

        self.persist(&products)?;

        tracing::info!(id, remaining = products.len(), "deleted product");
        Ok(())
    }

    pub fn stats(&self) -> DashboardStats {
        stats::dashboard_stats(&self.list_all())
    }

    pub fn category_stats(&self) -> Vec<CategoryStats> {
        stats::category_breakdown(&self.list_all())
    }

    /// Drops the stored catalog; the next read seeds again.
    pub fn reset(&self) -> CatalogResult<()> {
        self.store.remove_item(&self.key)?;
        tracing::info!(key = %self.key, "catalog reset");
        Ok(())
    }

    fn load(&self) -> CatalogResult<Option<Vec<Product>>> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(None);
        };
        let products = serde_json::from_str(&raw)?;
        Ok(Some(products))
    }

    fn persist(&self, products: &[Product]) -> CatalogResult<()> {
        let raw = serde_json::to_string(products)?;
        self.store.set_item(&self.key, &raw)?;
        Ok(())
    }
}

/// Millisecond timestamp, bumped past any id already in use.
fn next_id(products: &[Product]) -> String {
    let mut candidate = chrono::Utc::now().timestamp_millis();
    while products.iter().any(|p| p.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}

use crate::catalog::CatalogStore;
use crate::db::KeyValueStore;
use crate::error::CatalogError;
use crate::models::{Alert, Product};
use crate::validation::ProductForm;

pub const OPERATION_FAILED: &str = "Operation failed";

/// Storefront listing: published products only.
pub fn get_products<S: KeyValueStore>(catalog: &CatalogStore<S>) -> Vec<Product> {
    catalog.list_published()
}

pub fn get_products_by_category<S: KeyValueStore>(
    catalog: &CatalogStore<S>,
    category: &str,
) -> Vec<Product> {
    catalog
        .list_published()
        .into_iter()
        .filter(|p| p.category == category)
        .collect()
}

/// Storefront detail page; unpublished products are hidden.
pub fn get_product<S: KeyValueStore>(catalog: &CatalogStore<S>, id: &str) -> Option<Product> {
    catalog.get_by_id(id).filter(|p| p.is_published)
}

/// Admin edit page: pre-filled form for an existing product.
pub fn edit_form<S: KeyValueStore>(catalog: &CatalogStore<S>, id: &str) -> Option<ProductForm> {
    catalog.get_by_id(id).map(|p| ProductForm::from_product(&p))
}

pub fn create_product<S: KeyValueStore>(
    catalog: &CatalogStore<S>,
    form: &ProductForm,
) -> Result<Product, Alert> {
    let data = form.validate().map_err(|e| Alert::warning(e.to_string()))?;
    catalog.create(data).map_err(failed("create"))
}

/// Returns `Ok(None)` when no product has `id`; the store treats that as a
/// no-op rather than an error.
pub fn update_product<S: KeyValueStore>(
    catalog: &CatalogStore<S>,
    id: &str,
    form: &ProductForm,
) -> Result<Option<Product>, Alert> {
    let data = form.validate().map_err(|e| Alert::warning(e.to_string()))?;
    catalog.update(id, data.into()).map_err(failed("update"))
}

pub fn delete_product<S: KeyValueStore>(catalog: &CatalogStore<S>, id: &str) -> Result<Alert, Alert> {
    catalog.delete(id).map_err(failed("delete"))?;
    Ok(Alert::success("Product deleted"))
}

fn failed(action: &'static str) -> impl Fn(CatalogError) -> Alert {
    move |e| {
        tracing::error!(action, error = %e, "catalog operation failed");
        Alert::error(OPERATION_FAILED)
    }
}

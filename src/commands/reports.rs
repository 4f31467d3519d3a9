use serde::Serialize;

use crate::catalog::CatalogStore;
use crate::db::KeyValueStore;
use crate::models::{CategoryStats, DashboardStats, Product};
use crate::stats;

/// Everything the admin dashboard renders on load.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub products: Vec<Product>,
    pub stats: DashboardStats,
    pub categories: Vec<CategoryStats>,
    pub top_category: Option<String>,
}

pub fn load_dashboard<S: KeyValueStore>(catalog: &CatalogStore<S>) -> DashboardView {
    // One read feeds every panel.
    let products = catalog.list_all();
    let stats = stats::dashboard_stats(&products);
    let categories = stats::category_breakdown(&products);
    let top_category = stats::top_category(&categories).map(|c| c.name.clone());

    tracing::debug!(
        total = stats.total_products,
        published = stats.published_products,
        "dashboard loaded"
    );

    DashboardView {
        products,
        stats,
        categories,
        top_category,
    }
}

pub fn get_dashboard_stats<S: KeyValueStore>(catalog: &CatalogStore<S>) -> DashboardStats {
    catalog.stats()
}

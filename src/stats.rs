//! Dashboard aggregates, recomputed from the full catalog on every call.

use crate::models::{CategoryStats, DashboardStats, Product, CATEGORIES};

pub fn dashboard_stats(products: &[Product]) -> DashboardStats {
    let mut stats = DashboardStats::default();
    let mut price_sum = 0.0;

    for product in products {
        stats.total_products += 1;
        if product.is_published {
            stats.published_products += 1;
        }
        stats.total_revenue += product.revenue();
        stats.total_stock += u64::from(product.stock);
        stats.total_sales += u64::from(product.sales);
        price_sum += product.price;
    }

    if stats.total_products > 0 {
        stats.avg_price = price_sum / stats.total_products as f64;
    }

    stats
}

/// Per-category count, revenue and units for the storefront categories.
pub fn category_breakdown(products: &[Product]) -> Vec<CategoryStats> {
    let mut breakdown: Vec<CategoryStats> = CATEGORIES
        .iter()
        .map(|name| CategoryStats {
            name: name.to_string(),
            count: 0,
            revenue: 0.0,
            units: 0,
        })
        .collect();

    for product in products {
        if let Some(entry) = breakdown.iter_mut().find(|c| c.name == product.category) {
            entry.count += 1;
            entry.revenue += product.revenue();
            entry.units += u64::from(product.sales);
        }
    }

    breakdown
}

/// Category with the highest revenue; `None` when nothing has sold.
pub fn top_category(breakdown: &[CategoryStats]) -> Option<&CategoryStats> {
    breakdown
        .iter()
        .filter(|c| c.revenue > 0.0)
        .max_by(|a, b| a.revenue.total_cmp(&b.revenue))
}

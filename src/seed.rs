use crate::models::Product;

const SEED_DATE: &str = "2024-01-15";

struct SeedRow {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    price: f64,
    description: &'static str,
    sales: u32,
    stock: u32,
    is_published: bool,
    image: &'static str,
}

const SEED_ROWS: [SeedRow; 7] = [
    SeedRow {
        id: "1",
        name: "iPhone 14 Pro",
        category: "Apple Products",
        price: 999.99,
        description: "Latest Apple smartphone with advanced camera system",
        sales: 150,
        stock: 25,
        is_published: true,
        image: "https://images.unsplash.com/photo-1675865485486-1bfb60f5b8bb?w=400&h=400&fit=crop",
    },
    SeedRow {
        id: "2",
        name: "MacBook Air M2",
        category: "Apple Products",
        price: 1199.99,
        description: "Thin and light laptop with Apple M2 chip",
        sales: 85,
        stock: 12,
        is_published: true,
        image: "https://images.unsplash.com/photo-1541807084-5c52b6b3adef?w=400&h=400&fit=crop",
    },
    SeedRow {
        id: "3",
        name: "Samsung Galaxy S23",
        category: "Mobile Products",
        price: 799.99,
        description: "Android flagship phone with excellent camera",
        sales: 120,
        stock: 30,
        is_published: true,
        image: "https://images.unsplash.com/photo-1610945265064-0e34e5519bbf?w=400&h=400&fit=crop",
    },
    SeedRow {
        id: "4",
        name: "YouTube Premium Subscription",
        category: "Digital Product",
        price: 11.99,
        description: "Ad-free YouTube and background playback",
        sales: 450,
        stock: 999,
        is_published: true,
        image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=400&h=400&fit=crop",
    },
    SeedRow {
        id: "5",
        name: "Smart Home Hub",
        category: "Home Products",
        price: 89.99,
        description: "Central control for all your smart home devices",
        sales: 75,
        stock: 40,
        is_published: true,
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400&h=400&fit=crop",
    },
    SeedRow {
        id: "6",
        name: "iPad Air",
        category: "Apple Products",
        price: 599.99,
        description: "Powerful tablet for work and entertainment",
        sales: 95,
        stock: 18,
        is_published: true,
        image: "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400&h=400&fit=crop",
    },
    SeedRow {
        id: "7",
        name: "Google Pixel 8",
        category: "Mobile Products",
        price: 699.99,
        description: "Pure Android experience with on-device AI features",
        sales: 0,
        stock: 8,
        is_published: false,
        image: "https://images.unsplash.com/photo-1598327105666-5b89351aff97?w=400&h=400&fit=crop",
    },
];

/// The built-in catalog written on first access.
pub fn seed_products() -> Vec<Product> {
    SEED_ROWS
        .iter()
        .map(|row| Product {
            id: row.id.to_string(),
            name: row.name.to_string(),
            category: row.category.to_string(),
            price: row.price,
            description: row.description.to_string(),
            sales: row.sales,
            image: row.image.to_string(),
            is_published: row.is_published,
            stock: row.stock,
            created_at: SEED_DATE.to_string(),
            updated_at: SEED_DATE.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CATEGORIES;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let products = seed_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_seed_uses_storefront_categories() {
        for product in seed_products() {
            assert!(
                CATEGORIES.contains(&product.category.as_str()),
                "unexpected category {}",
                product.category
            );
        }
    }

    #[test]
    fn test_seed_has_unpublished_entry() {
        let unpublished = seed_products().into_iter().filter(|p| !p.is_published).count();
        assert_eq!(unpublished, 1);
    }
}

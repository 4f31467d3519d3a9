use serde::{Deserialize, Serialize};

/// Storefront categories, in display order.
pub const CATEGORIES: [&str; 4] = [
    "Apple Products",
    "Mobile Products",
    "Digital Product",
    "Home Products",
];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub sales: u32,
    pub image: String,
    // Collections stored before these fields existed still load.
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub description: String,
    pub sales: u32,
    pub image: String,
    pub is_published: bool,
    pub stock: u32,
}

/// Partial update; `None` fields keep their stored value.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub sales: Option<u32>,
    pub image: Option<String>,
    pub is_published: Option<bool>,
    pub stock: Option<u32>,
}

impl Product {
    pub fn from_new(id: String, data: NewProduct, today: &str) -> Self {
        Product {
            id,
            name: data.name,
            category: data.category,
            price: data.price,
            description: data.description,
            sales: data.sales,
            image: data.image,
            is_published: data.is_published,
            stock: data.stock,
            created_at: today.to_string(),
            updated_at: today.to_string(),
        }
    }

    /// Merges `patch` in place. `id` and `created_at` are never touched.
    pub fn apply(&mut self, patch: ProductPatch, today: &str) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(sales) = patch.sales {
            self.sales = sales;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(is_published) = patch.is_published {
            self.is_published = is_published;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        self.updated_at = today.to_string();
    }

    pub fn revenue(&self) -> f64 {
        self.price * f64::from(self.sales)
    }
}

impl From<NewProduct> for ProductPatch {
    fn from(data: NewProduct) -> Self {
        ProductPatch {
            name: Some(data.name),
            category: Some(data.category),
            price: Some(data.price),
            description: Some(data.description),
            sales: Some(data.sales),
            image: Some(data.image),
            is_published: Some(data.is_published),
            stock: Some(data.stock),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_products: usize,
    pub published_products: usize,
    pub total_revenue: f64,
    pub total_stock: u64,
    pub total_sales: u64,
    pub avg_price: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CategoryStats {
    pub name: String,
    pub count: usize,
    pub revenue: f64,
    pub units: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Customer,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

/// Transient notification shown by a page after an action.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Alert {
            message: message.into(),
            kind: AlertKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Alert {
            message: message.into(),
            kind: AlertKind::Error,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Alert {
            message: message.into(),
            kind: AlertKind::Warning,
        }
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{NewProduct, Product, CATEGORIES};

pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1580894894513-541e068a3e2b?w=400&h=400&fit=crop&auto=format";

/// Product form as submitted: numeric fields are still raw text.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub description: String,
    pub sales: String,
    pub image: String,
    pub stock: String,
    pub is_published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Error)]
#[error("{}", .0.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ProductForm {
    /// Pre-fills the edit form from a stored product.
    pub fn from_product(product: &Product) -> Self {
        ProductForm {
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            sales: product.sales.to_string(),
            image: product.image.clone(),
            stock: product.stock.to_string(),
            is_published: product.is_published,
        }
    }

    pub fn validate(&self) -> Result<NewProduct, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let name = required(&mut errors, "name", &self.name);
        let description = required(&mut errors, "description", &self.description);
        let category = required(&mut errors, "category", &self.category);
        if !category.is_empty() && !CATEGORIES.contains(&category.as_str()) {
            errors.push("category", format!("Unknown category '{}'", category));
        }

        let price = match self.price.trim().parse::<f64>() {
            Ok(p) if p.is_finite() && p > 0.0 => p,
            Ok(_) => {
                errors.push("price", "Price must be greater than 0");
                0.0
            }
            Err(_) => {
                errors.push("price", "Price must be a number");
                0.0
            }
        };

        let stock = count(&mut errors, "stock", "Stock", &self.stock);
        let sales = count(&mut errors, "sales", "Sales", &self.sales);

        if !errors.is_empty() {
            return Err(errors);
        }

        let image = match self.image.trim() {
            "" => PLACEHOLDER_IMAGE.to_string(),
            url => url.to_string(),
        };

        Ok(NewProduct {
            name,
            category,
            price,
            description,
            sales,
            image,
            is_published: self.is_published,
            stock,
        })
    }
}

fn required(errors: &mut ValidationErrors, field: &'static str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.push(field, format!("{} is required", capitalize(field)));
    }
    value.to_string()
}

// Blank counts as zero.
fn count(errors: &mut ValidationErrors, field: &'static str, label: &str, value: &str) -> u32 {
    let value = value.trim();
    if value.is_empty() {
        return 0;
    }
    match value.parse::<i64>() {
        Ok(n) if n < 0 => {
            errors.push(field, format!("{} cannot be negative", label));
            0
        }
        Ok(n) => match u32::try_from(n) {
            Ok(n) => n,
            Err(_) => {
                errors.push(field, format!("{} is too large", label));
                0
            }
        },
        Err(_) => {
            errors.push(field, format!("{} must be a whole number", label));
            0
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

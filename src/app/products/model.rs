//! Product data model and request/response shapes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
}

/// A fully validated create payload, ready for id assignment.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Create request body. Every field is optional at the serde level so the
/// presence checks stay in one place instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    #[serde(rename = "inStock")]
    pub in_stock: Option<bool>,
}

impl CreateProduct {
    /// All fields are required: `name`, `description` and `category` must
    /// be present and non-empty, `price` present and non-zero, `in_stock`
    /// merely present (`false` is a valid value).
    pub fn into_valid(self) -> Option<NewProduct> {
        let name = self.name.filter(|s| !s.is_empty())?;
        let description = self.description.filter(|s| !s.is_empty())?;
        let category = self.category.filter(|s| !s.is_empty())?;
        let price = self.price.filter(|p| *p != 0.0)?;
        let in_stock = self.in_stock?;

        Some(NewProduct {
            name,
            description,
            price,
            category,
            in_stock,
        })
    }
}

/// Partial update body; absent fields keep their current values.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    #[serde(rename = "inStock")]
    pub in_stock: Option<bool>,
}

/// Query parameters for the list endpoint. `page` and `limit` arrive as
/// raw strings so unparseable values can fall back to the defaults
/// instead of failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub name: Option<String>,
}

/// Envelope for the paginated list response.
#[derive(Debug, Serialize)]
pub struct ProductPage {
    pub total: usize,
    pub page: u64,
    pub limit: u64,
    pub products: Vec<Product>,
}

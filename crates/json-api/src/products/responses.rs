//! Product Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use inventory_app::domain::products::models::Product;

/// A stored product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Store-assigned identifier
    pub id: i32,

    pub name: String,

    /// Price, always greater than zero
    pub price: f64,

    /// Whether the product is currently available
    pub availability: bool,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        ProductResponse {
            id: product.id.into_inner(),
            name: product.name,
            price: product.price,
            availability: product.availability,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Single product envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDataResponse {
    pub data: ProductResponse,
}

/// Product list envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsDataResponse {
    pub data: Vec<ProductResponse>,
}

/// Confirmation message envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageDataResponse {
    pub data: String,
}

impl From<Product> for ProductDataResponse {
    fn from(product: Product) -> Self {
        Self {
            data: product.into(),
        }
    }
}

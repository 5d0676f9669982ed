//! Product Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;

/// Product identifier, assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(i32);

impl ProductId {
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<i32> for ProductId {
    fn from(value: i32) -> Self {
        Self::new(value)
    }
}

impl From<ProductId> for i32 {
    fn from(value: ProductId) -> Self {
        value.into_inner()
    }
}

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub availability: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

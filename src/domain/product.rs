use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryName, ProductId, ProductName, ProductPrice};

/// A product as persisted by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub price: ProductPrice,
    pub category: CategoryName,
    /// Stored as UTC.
    pub created_at: NaiveDateTime,
    /// Stored as UTC, refreshed on every update.
    pub updated_at: NaiveDateTime,
}

/// Information required to create a new [`Product`].
///
/// Identifier and timestamps are assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub name: ProductName,
    pub price: ProductPrice,
    pub category: CategoryName,
}

/// Partial replacement of a [`Product`]'s fields.
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<ProductName>,
    pub price: Option<ProductPrice>,
    pub category: Option<CategoryName>,
}


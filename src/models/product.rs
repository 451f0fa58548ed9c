use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductUpdate,
};
use crate::domain::types::{CategoryName, ProductName, ProductPrice, TypeConstraintError};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Changeset for partial updates; `None` columns are left untouched.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductChangeset {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            name: ProductName::new(product.name)?,
            price: ProductPrice::new(product.price)?,
            category: CategoryName::new(product.category)?,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

impl NewProduct {
    /// Build an insertable row stamped with `now` for both timestamps.
    pub fn from_domain(product: DomainNewProduct, now: NaiveDateTime) -> Self {
        Self {
            name: product.name.into_inner(),
            price: product.price.get(),
            category: product.category.into_inner(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl ProductChangeset {
    /// Build a changeset that also refreshes `updated_at` to `now`.
    pub fn from_domain(update: ProductUpdate, now: NaiveDateTime) -> Self {
        Self {
            name: update.name.map(ProductName::into_inner),
            price: update.price.map(ProductPrice::get),
            category: update.category.map(CategoryName::into_inner),
            updated_at: now,
        }
    }
}

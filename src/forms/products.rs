use std::borrow::Cow;

use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::product::{NewProduct, ProductUpdate};
use crate::domain::types::{CategoryName, ProductName, ProductPrice, TypeConstraintError};
use crate::forms::{describe_validation_errors, deserialize_present};

/// Request body accepted when creating a product.
///
/// Fields are optional at the deserialization level so that missing fields
/// surface as validation messages instead of JSON errors.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateProductForm {
    #[validate(
        required(message = "Product name is required"),
        length(min = 1, message = "Product name is required")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Product price is required"),
        range(min = 0.0, message = "Price cannot be negative")
    )]
    pub price: Option<f64>,
    #[validate(
        required(message = "Product category is required"),
        length(min = 1, message = "Product category is required")
    )]
    pub category: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum CreateProductFormError {
    #[error("Product validation failed: {0}")]
    Validation(String),
    #[error("Product validation failed: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CreateProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(describe_validation_errors(&value))
    }
}

impl From<TypeConstraintError> for CreateProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<CreateProductForm> for NewProduct {
    type Error = CreateProductFormError;

    fn try_from(value: CreateProductForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let (Some(name), Some(price), Some(category)) = (value.name, value.price, value.category)
        else {
            return Err(CreateProductFormError::Validation(
                "name, price and category are required".to_string(),
            ));
        };

        Ok(Self {
            name: ProductName::new(name)?,
            price: ProductPrice::new(price)?,
            category: CategoryName::new(category)?,
        })
    }
}

/// Request body accepted when updating a product.
///
/// The outer `Option` tells whether a field was sent at all: absent fields stay
/// untouched, while an explicit `null` is `Some(None)` and fails as a missing
/// required value.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateProductForm {
    #[serde(default, deserialize_with = "deserialize_present")]
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<Option<f64>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    #[validate(length(min = 1, message = "Product category is required"))]
    pub category: Option<Option<String>>,
}

fn reject_null<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &Option<Option<T>>,
    message: &'static str,
) {
    if matches!(value, Some(None)) {
        errors.add(
            field,
            ValidationError::new("required").with_message(Cow::Borrowed(message)),
        );
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum UpdateProductFormError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Validation failed: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(describe_validation_errors(&value))
    }
}

impl From<TypeConstraintError> for UpdateProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateProductForm> for ProductUpdate {
    type Error = UpdateProductFormError;

    fn try_from(value: UpdateProductForm) -> Result<Self, Self::Error> {
        let mut errors = match value.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        reject_null(&mut errors, "name", &value.name, "Product name is required");
        reject_null(&mut errors, "price", &value.price, "Product price is required");
        reject_null(
            &mut errors,
            "category",
            &value.category,
            "Product category is required",
        );
        if !errors.is_empty() {
            return Err(errors.into());
        }

        Ok(Self {
            name: value.name.flatten().map(ProductName::new).transpose()?,
            price: value.price.flatten().map(ProductPrice::new).transpose()?,
            category: value.category.flatten().map(CategoryName::new).transpose()?,
        })
    }
}

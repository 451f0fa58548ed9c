//! Request bodies and their validation.

use serde::{Deserialize, Deserializer};
use validator::{ValidationErrors, ValidationErrorsKind};

pub mod products;

/// Render field errors as `field: message` pairs sorted by field name.
pub(crate) fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields = errors
        .errors()
        .iter()
        .filter_map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(errors) => Some((field.as_ref(), errors)),
            _ => None,
        })
        .collect::<Vec<_>>();
    fields.sort_by(|a, b| a.0.cmp(b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: {}", error.code),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Deserialize a field that was present in the body, keeping an explicit
/// `null` as `Some(None)`. Pair with `#[serde(default)]` so that absent fields
/// stay `None`.
pub(crate) fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

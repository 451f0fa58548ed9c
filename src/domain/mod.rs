//! Domain entities and value types, independent of storage and transport.

pub mod product;
pub mod types;

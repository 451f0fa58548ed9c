//! Persistence models mapped onto the Diesel schema, plus server configuration.

#[cfg(feature = "server")]
pub mod config;
pub mod product;

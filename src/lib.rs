//! Core library exports for the product service.
//!
//! With the `data` feature this crate exposes the domain, persistence models
//! and repositories; the `server` feature adds forms, services and the
//! actix-web routes used by the HTTP binary.

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

//! Core library exports for the product catalog service.
//!
//! The `data` feature exposes the persistence layer (domain types, Diesel
//! models and repositories). The `server` feature adds request validation,
//! the service layer and the actix-web routes used by the storefront and the
//! admin panel.

pub mod db;
pub mod domain;
mod error_conversions;
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

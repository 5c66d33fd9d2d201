//! Storefront - E-commerce backend.
//!
//! This crate exposes a product catalog and per-user shopping carts over
//! REST, keeping each cart's line items and derived totals consistent
//! under add/update/remove/clear mutations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

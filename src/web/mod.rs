//! Web dashboard layer for browser-based UI.
//!
//! A read-only page showing the grid and the parking history, rendered with
//! Askama templates.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Dashboard route configuration

pub mod handlers;
pub mod routes;

//! HTTP dashboard for the climate bulletin app.
//!
//! This crate focuses on:
//! - Route and request handling
//! - HTML templating (dashboard page, map embed, chart series)
//! - PDF bulletin generation

pub mod error;
pub mod handlers;
pub mod map;
pub mod pdf;
pub mod routes;
pub mod state;
pub mod view;

// ABOUTME: Public library API for the Mesh to Hugo exporter
// ABOUTME: Re-exports core modules for the binary and integration tests

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod field;
pub mod model;
pub mod project;
pub mod schema;
pub mod storage;
pub mod util;

pub use error::{Error, Result};
pub use model::{NodeResponse, SchemaResponse};

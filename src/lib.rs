//! Web service for the Google publishing project.
//!
//! A single-route HTTP service: `GET /` returns a static greeting. The
//! publishing integration itself does not exist yet; the configuration
//! record and response envelope it will use are declared here so the shapes
//! are stable for clients.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`types`]: Publish response envelope
//! - [`api`]: HTTP routes and handlers
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::Config;
pub use error::{AppError, Result};
pub use types::PublishResponse;

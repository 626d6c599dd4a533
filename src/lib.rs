//! Contact Book - an in-memory contact book exposed over HTTP.
//!
//! Contacts are created, listed, searched and deleted through a small JSON API.
//! Nothing is persisted; the collection lives for the lifetime of the process.
//!
//! # Architecture
//!
//! - **models**: The `Contact` record
//! - **domain**: Validation errors and the phone query value object
//! - **repositories**: In-memory storage enforcing validation and uniqueness
//! - **services**: Pass-through orchestration between handlers and storage
//! - **server**: axum routes and status-code mapping
//! - **config**: Configuration from environment variables
//! - **error**: HTTP and configuration error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use config::{Config, LogFormat};
pub use domain::{PhoneQuery, ValidationError};
pub use error::{ApiError, ConfigError};
pub use models::Contact;
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use server::ContactServer;
pub use services::{ContactService, ContactServiceImpl};

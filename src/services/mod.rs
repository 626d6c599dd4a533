//! Application service layer.
//!
//! Services sit between the HTTP handlers and the repository. They do no
//! validation of their own; repository errors pass through unchanged.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl};

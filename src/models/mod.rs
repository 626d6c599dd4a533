//! Data models for the contact book.

pub mod contact;

pub use contact::Contact;

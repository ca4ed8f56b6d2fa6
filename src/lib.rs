//! Contact Book - a small in-memory contact list web application.
//!
//! Contacts are kept in memory, listed sorted by last name then first name,
//! and added through a validated HTML form.
//!
//! # Architecture
//!
//! - **models**: The contact record and the raw form submission
//! - **domain**: Field rules and the validation error taxonomy
//! - **validation**: The ordered validation pipeline and duplicate check
//! - **sorting**: Display ordering
//! - **store**: In-memory contact storage
//! - **services**: Listing and creation logic behind the HTTP handlers
//! - **views**: HTML rendering
//! - **server**: Axum router, handlers and access logging
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod sorting;
pub mod store;
pub mod validation;
pub mod views;

pub use config::Config;
pub use domain::{Field, ValidationError};
pub use error::{ConfigError, ServerError};
pub use models::{Contact, NewContactForm};
pub use server::{router, run_server, AppState};
pub use services::{ContactRejection, ContactService, ContactServiceImpl};
pub use sorting::{compare_contacts, sorted_view};
pub use store::ContactStore;
pub use validation::{validate_submission, ValidationReport};

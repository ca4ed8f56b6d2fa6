//! Application service layer.
//!
//! Services contain the business logic between the HTTP handlers and the
//! contact store.

mod contact_service;

pub use contact_service::{ContactRejection, ContactService, ContactServiceImpl};

//! Test doubles for the service layer.

pub mod mock_contact_service;

pub use mock_contact_service::MockContactService;

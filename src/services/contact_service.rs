//! Contact service layer.
//!
//! Business logic for listing contacts and admitting new ones.

use crate::domain::ValidationError;
use crate::models::{Contact, NewContactForm};
use crate::sorting::sorted_view;
use crate::store::ContactStore;
use crate::validation::validate_submission;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info};

/// A submission that failed validation.
///
/// Carries every error in reporting order plus the raw values, so the form
/// can be shown again exactly as the user typed it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("contact submission rejected with {} error(s)", .errors.len())]
pub struct ContactRejection {
    pub errors: Vec<ValidationError>,
    pub submitted: NewContactForm,
}

impl ContactRejection {
    /// User-facing messages in reporting order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts in display order (last name, then first name).
    async fn list_contacts(&self) -> Vec<Contact>;

    /// Validate a submission and store it if it passes.
    ///
    /// Validation and the append happen as one step, so two requests for
    /// the same name cannot both succeed.
    async fn create_contact(&self, form: NewContactForm) -> Result<Contact, ContactRejection>;
}

/// Default implementation of ContactService backed by a [`ContactStore`].
#[derive(Debug, Clone)]
pub struct ContactServiceImpl {
    store: ContactStore,
}

impl ContactServiceImpl {
    /// Create a new contact service over the given store.
    pub fn new(store: ContactStore) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &ContactStore {
        &self.store
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn list_contacts(&self) -> Vec<Contact> {
        // Sort a snapshot; the store keeps insertion order
        sorted_view(&self.store.all())
    }

    async fn create_contact(&self, form: NewContactForm) -> Result<Contact, ContactRejection> {
        // Validate against the current contacts and append under one lock
        let result = self.store.append_with(|existing| {
            let report = validate_submission(&form, existing);
            if report.is_valid() {
                Ok(form.clone().into_contact())
            } else {
                Err(report.into_errors())
            }
        });

        match result {
            Ok(contact) => {
                info!(
                    "Created contact {} ({} total)",
                    contact.full_name(),
                    self.store.len()
                );
                Ok(contact)
            }
            Err(errors) => {
                // Hand the raw values back so the form can be re-populated
                debug!("Rejected contact submission with {} error(s)", errors.len());
                Err(ContactRejection {
                    errors,
                    submitted: form,
                })
            }
        }
    }
}

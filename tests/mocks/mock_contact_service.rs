use async_trait::async_trait;
use contact_book::models::{Contact, NewContactForm};
use contact_book::services::{ContactRejection, ContactService};
use contact_book::ValidationError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact service for handler tests.
///
/// Returns canned contacts, rejects every submission with the configured
/// errors (or accepts it when none are configured), and tracks method calls
/// for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactService {
    contacts: Arc<Mutex<Vec<Contact>>>,
    rejection_errors: Arc<Mutex<Vec<ValidationError>>>,
    submissions: Arc<Mutex<Vec<NewContactForm>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactService {
    /// Create a new empty MockContactService.
    pub fn new() -> Self {
        Self::default()
    }

    /// Contacts returned by `list_contacts`, as given.
    pub fn with_contacts(self, contacts: Vec<Contact>) -> Self {
        *self.contacts.lock().unwrap() = contacts;
        self
    }

    /// Make every submission fail with these errors.
    pub fn rejecting_with(self, errors: Vec<ValidationError>) -> Self {
        *self.rejection_errors.lock().unwrap() = errors;
        self
    }

    /// Forms received by `create_contact`.
    pub fn submissions(&self) -> Vec<NewContactForm> {
        self.submissions.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl ContactService for MockContactService {
    async fn list_contacts(&self) -> Vec<Contact> {
        self.track_call("list_contacts");
        self.contacts.lock().unwrap().clone()
    }

    async fn create_contact(&self, form: NewContactForm) -> Result<Contact, ContactRejection> {
        self.track_call("create_contact");
        self.submissions.lock().unwrap().push(form.clone());

        let errors = self.rejection_errors.lock().unwrap().clone();
        if errors.is_empty() {
            Ok(form.into_contact())
        } else {
            Err(ContactRejection {
                errors,
                submitted: form,
            })
        }
    }
}

//! In-memory contact store.
//!
//! The store owns every contact record. It is cheap to clone (the list sits
//! behind an `Arc`), so one instance is created at startup and handed to the
//! service layer.

use crate::models::Contact;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Insertion-ordered list of contacts, safe to share between requests.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Arc<RwLock<Vec<Contact>>>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `contacts` in the given order.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Arc::new(RwLock::new(contacts)),
        }
    }

    /// Create a store holding the sample contacts.
    pub fn seeded() -> Self {
        Self::with_contacts(sample_contacts())
    }

    /// Add a contact to the end of the list. No validation is done here.
    pub fn append(&self, contact: Contact) {
        self.write().push(contact);
    }

    /// Snapshot of every contact in insertion order.
    pub fn all(&self) -> Vec<Contact> {
        self.read().clone()
    }

    /// Build a contact from the current list and append it, atomically.
    ///
    /// The write lock is held while `build` inspects the existing contacts,
    /// so no other append can slip in between the check and the push.
    /// Nothing is stored when `build` returns an error.
    pub fn append_with<F, E>(&self, build: F) -> Result<Contact, E>
    where
        F: FnOnce(&[Contact]) -> Result<Contact, E>,
    {
        let mut contacts = self.write();
        let contact = build(contacts.as_slice())?;
        contacts.push(contact.clone());
        Ok(contact)
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Poisoning is ignored: a push never leaves the Vec half-written.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Contact>> {
        self.contacts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Contact>> {
        self.contacts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Contacts the application starts with when seeding is enabled.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact::new("Mike", "Jones", "281-330-8004"),
        Contact::new("Jenny", "Keys", "768-867-5309"),
        Contact::new("Max", "Entiger", "214-748-3647"),
        Contact::new("Alicia", "Keys", "515-489-4608"),
    ]
}

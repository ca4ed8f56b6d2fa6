//! Display ordering for contacts.

use crate::models::Contact;
use std::cmp::Ordering;

/// Order by last name, then first name.
///
/// Plain ordinal string comparison: case-sensitive, not locale-aware.
pub fn compare_contacts(a: &Contact, b: &Contact) -> Ordering {
    a.last_name
        .cmp(&b.last_name)
        .then_with(|| a.first_name.cmp(&b.first_name))
}

/// Return the contacts in display order without touching the input.
///
/// The sort is stable, so contacts with equal names keep their insertion
/// order.
pub fn sorted_view(contacts: &[Contact]) -> Vec<Contact> {
    let mut sorted = contacts.to_vec();
    sorted.sort_by(compare_contacts);
    sorted
}

//! Behavioral tests for sorting, validation, and contact creation.

use contact_book::services::{ContactService, ContactServiceImpl};
use contact_book::{sorted_view, validate_submission, Contact, ContactStore, NewContactForm};
use std::sync::Arc;

fn messages_for(form: NewContactForm) -> Vec<String> {
    validate_submission(&form, &[]).messages()
}

#[test]
fn test_sorted_view_example() {
    let contacts = vec![
        Contact::new("Jenny", "Keys", "768-867-5309"),
        Contact::new("Alicia", "Keys", "515-489-4608"),
        Contact::new("Mike", "Jones", "281-330-8004"),
    ];

    let sorted: Vec<String> = sorted_view(&contacts)
        .iter()
        .map(Contact::full_name)
        .collect();
    assert_eq!(sorted, vec!["Mike Jones", "Alicia Keys", "Jenny Keys"]);
    assert_eq!(contacts[0].first_name, "Jenny");
}

#[test]
fn test_required_first_name_reports_one_message() {
    let messages = messages_for(NewContactForm::new("", "Smith", "555-123-4567"));
    assert_eq!(messages, vec!["First name is required."]);
}

#[test]
fn test_long_first_name_runs_both_checks() {
    let messages = messages_for(NewContactForm::new("a".repeat(26), "Smith", "555-123-4567"));
    assert_eq!(messages, vec!["First name must be 25 characters or less."]);

    let messages = messages_for(NewContactForm::new(
        format!("{}9", "a".repeat(25)),
        "Smith",
        "555-123-4567",
    ));
    assert_eq!(
        messages,
        vec![
            "First name must be 25 characters or less.",
            "First name must only contain alphabetic characters.",
        ]
    );
}

#[test]
fn test_first_name_character_class() {
    let messages = messages_for(NewContactForm::new("Bob1", "Smith", "555-123-4567"));
    assert_eq!(
        messages,
        vec!["First name must only contain alphabetic characters."]
    );
}

#[test]
fn test_last_name_uses_last_label() {
    let messages = messages_for(NewContactForm::new("Pat", "Sm1th", "555-123-4567"));
    assert_eq!(
        messages,
        vec!["Last name must only contain alphabetic characters."]
    );
}

#[test]
fn test_phone_format() {
    let messages = messages_for(NewContactForm::new("Pat", "Smith", "1234567890"));
    assert_eq!(
        messages,
        vec!["Phone numbers must be formatted as ###-###-####"]
    );

    assert!(messages_for(NewContactForm::new("Pat", "Smith", "555-123-4567")).is_empty());
}

#[test]
fn test_phone_required_suppresses_format() {
    let messages = messages_for(NewContactForm::new("Pat", "Smith", "  "));
    assert_eq!(messages, vec!["Phone number is required."]);
}

#[test]
fn test_byte_order_mark_only_name_is_required() {
    let messages = messages_for(NewContactForm::new("\u{FEFF}", "Smith", "555-123-4567"));
    assert_eq!(messages, vec!["First name is required."]);
}

#[tokio::test]
async fn test_duplicate_rejected_and_store_unchanged() {
    let store = ContactStore::with_contacts(vec![Contact::new("Mike", "Jones", "281-330-8004")]);
    let service = ContactServiceImpl::new(store.clone());

    let rejection = service
        .create_contact(NewContactForm::new("Mike", "Jones", "999-999-9999"))
        .await
        .unwrap_err();

    assert_eq!(
        rejection.messages(),
        vec!["That name already exists. Please choose another"]
    );
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_success_adds_entry_in_sorted_position() {
    let store = ContactStore::seeded();
    let service = ContactServiceImpl::new(store.clone());

    service
        .create_contact(NewContactForm::new("Pat", "Smith", "555-000-1111"))
        .await
        .unwrap();

    assert_eq!(store.len(), 5);
    let names: Vec<String> = service
        .list_contacts()
        .await
        .iter()
        .map(Contact::full_name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Max Entiger",
            "Mike Jones",
            "Alicia Keys",
            "Jenny Keys",
            "Pat Smith"
        ]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_submissions_admit_one() {
    let service = Arc::new(ContactServiceImpl::new(ContactStore::new()));

    let tasks: Vec<_> = (0..16)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move {
                service
                    .create_contact(NewContactForm::new("Pat", "Smith", "555-000-1111"))
                    .await
                    .is_ok()
            })
        })
        .collect();

    let mut admitted = 0;
    for task in tasks {
        if task.await.unwrap() {
            admitted += 1;
        }
    }

    assert_eq!(admitted, 1);
    assert_eq!(service.store().len(), 1);
}

//! HTTP handlers for the contact pages.

use super::AppState;
use crate::models::NewContactForm;
use crate::views::{render_contacts, render_new_contact};
use axum::body::Bytes;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};

/// `GET /`
pub async fn index() -> Redirect {
    Redirect::to("/contacts")
}

/// `GET /contacts`
pub async fn list_contacts(State(state): State<AppState>) -> Html<String> {
    let contacts = state.contacts.list_contacts().await;
    Html(render_contacts(&contacts))
}

/// `GET /contacts/new`
pub async fn new_contact_form() -> Html<String> {
    Html(render_new_contact(&NewContactForm::default(), &[]))
}

/// `POST /contacts/new`
///
/// Redirects to the list on success. On failure the form is shown again
/// with every message and the values exactly as submitted. The body is
/// decoded leniently, so any request ends in one of those two outcomes.
pub async fn create_contact(State(state): State<AppState>, body: Bytes) -> Response {
    // Content-Type is not checked; repeated fields keep their last value
    let form = NewContactForm::from_urlencoded(&body);

    match state.contacts.create_contact(form).await {
        Ok(_) => Redirect::to("/contacts").into_response(),
        Err(rejection) => {
            Html(render_new_contact(&rejection.submitted, &rejection.messages())).into_response()
        }
    }
}

//! HTML rendering for the contact pages.
//!
//! Pages are built as plain strings. Every piece of user-supplied text goes
//! through [`escape_html`] before it is written out.

use crate::models::{Contact, NewContactForm};

const STYLESHEET: &str = "/stylesheets/contacts.css";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"{STYLESHEET}\">\n\
         </head>\n\
         <body>\n\
         <main>\n\
         {body}\
         </main>\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
    )
}

/// The contact list page. `contacts` must already be in display order.
pub fn render_contacts(contacts: &[Contact]) -> String {
    let mut body = String::from("<h1>Contacts</h1>\n");

    if contacts.is_empty() {
        body.push_str("<p class=\"empty\">There are no contacts yet.</p>\n");
    } else {
        body.push_str(
            "<table>\n<thead>\n<tr><th>First Name</th><th>Last Name</th><th>Phone Number</th></tr>\n</thead>\n<tbody>\n",
        );
        for contact in contacts {
            body.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape_html(&contact.first_name),
                escape_html(&contact.last_name),
                escape_html(&contact.phone_number),
            ));
        }
        body.push_str("</tbody>\n</table>\n");
    }

    body.push_str("<p><a href=\"/contacts/new\">Add a new contact</a></p>\n");
    layout("Contacts", &body)
}

/// The creation form, optionally with error messages and echoed values.
pub fn render_new_contact(form: &NewContactForm, error_messages: &[String]) -> String {
    let mut body = String::from("<h1>New Contact</h1>\n");

    if !error_messages.is_empty() {
        body.push_str("<ul class=\"errors\">\n");
        for message in error_messages {
            body.push_str(&format!("<li>{}</li>\n", escape_html(message)));
        }
        body.push_str("</ul>\n");
    }

    body.push_str("<form action=\"/contacts/new\" method=\"post\">\n");
    body.push_str(&text_input("firstName", "First Name", &form.first_name));
    body.push_str(&text_input("lastName", "Last Name", &form.last_name));
    body.push_str(&text_input("phoneNumber", "Phone Number", &form.phone_number));
    body.push_str("<button type=\"submit\">Save Contact</button>\n</form>\n");
    body.push_str("<p><a href=\"/contacts\">Back to contacts</a></p>\n");

    layout("New Contact", &body)
}

fn text_input(name: &str, label: &str, value: &str) -> String {
    format!(
        "<dl>\n<dt><label for=\"{name}\">{label}</label></dt>\n\
         <dd><input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{value}\"></dd>\n</dl>\n",
        value = escape_html(value),
    )
}

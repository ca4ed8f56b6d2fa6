//! Contact model and the raw creation-form submission.

/// A contact in the address book.
///
/// Contacts are only ever built from a submission that passed validation,
/// and they keep the submitted text exactly as typed (untrimmed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Phone number, `###-###-####`
    pub phone_number: String,
}

impl Contact {
    /// Create a new contact.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Full display name, "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this contact carries exactly the given name pair.
    ///
    /// Comparison is case-sensitive and does not trim.
    pub fn has_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }
}

/// Raw values posted by the "new contact" form.
///
/// Missing form fields are empty strings so that they flow through the
/// same required-field checks as blank ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewContactForm {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl NewContactForm {
    /// Build a form from its three raw field values.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Parse a `application/x-www-form-urlencoded` body.
    ///
    /// A repeated field keeps its last value, unknown fields are ignored and
    /// a body that cannot be decoded yields an empty form.
    pub fn from_urlencoded(body: &[u8]) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body).unwrap_or_default();

        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "firstName" => form.first_name = value,
                "lastName" => form.last_name = value,
                "phoneNumber" => form.phone_number = value,
                _ => {}
            }
        }
        form
    }

    /// Turn the submission into a contact, keeping the raw values.
    pub fn into_contact(self) -> Contact {
        Contact {
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
        }
    }
}

impl From<&Contact> for NewContactForm {
    fn from(contact: &Contact) -> Self {
        Self::new(
            contact.first_name.clone(),
            contact.last_name.clone(),
            contact.phone_number.clone(),
        )
    }
}

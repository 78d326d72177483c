use crate::errors::{AppError, AppResult};

/// A client tracked for billing or project purposes.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i32,               // ⇔ clients.id (INTEGER, assigned on insert)
    pub company: String,       // ⇔ clients.company
    pub name: String,          // ⇔ clients.name (contact person)
    pub email: String,         // ⇔ clients.email
    pub phone_number: String,  // ⇔ clients.phone_number
    pub timezone: String,      // ⇔ clients.timezone (offset or zone name)
}

impl Client {
    /// Build a not-yet-persisted client. `id` stays 0 until the store
    /// assigns the real one on insert. Contact fields are validated
    /// before anything touches the database.
    pub fn new(
        company: &str,
        name: &str,
        email: &str,
        phone_number: &str,
        timezone: &str,
    ) -> AppResult<Self> {
        let client = Self {
            id: 0,
            company: company.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone_number: phone_number.to_string(),
            timezone: timezone.to_string(),
        };
        client.validate()?;
        Ok(client)
    }

    /// Check the contact fields. Empty strings are allowed for
    /// company and name; email, phone and timezone must be well formed
    /// when present.
    pub fn validate(&self) -> AppResult<()> {
        let email_re =
            regex::Regex::new(r"^[a-zA-Z0-9_!#$%&'*+/=?`{|}~^.-]+@[a-zA-Z0-9.-]+$").unwrap();
        if !self.email.is_empty() && !email_re.is_match(&self.email) {
            return Err(AppError::InvalidEmail(self.email.clone()));
        }

        let phone_re = regex::Regex::new(r"^\+?[0-9][0-9()\-\s.]{2,19}$").unwrap();
        if !self.phone_number.is_empty() && !phone_re.is_match(&self.phone_number) {
            return Err(AppError::InvalidPhoneNumber(self.phone_number.clone()));
        }

        // Either a UTC offset (+02:00, -03:30) or a zone identifier
        // such as "UTC" or "Europe/Paris".
        let tz_re = regex::Regex::new(
            r"^(?:[+-][01][0-9]:[0-5][0-9]|[A-Za-z_]+(?:/[A-Za-z0-9_+\-]+)*)$",
        )
        .unwrap();
        if !tz_re.is_match(&self.timezone) {
            return Err(AppError::InvalidTimezone(self.timezone.clone()));
        }

        Ok(())
    }
}

//! Contact form draft and `mailto:` compose requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no mail transport. Submission builds a pre-filled compose request
//! and hands it to the visitor's email client through the host launcher.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::util::host::HostError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Form control `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Subject => "Subject",
            Self::Message => "Your Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{} is required", .0.name())]
    MissingField(ContactField),
    #[error("{0:?} is not an email address")]
    InvalidEmail(String),
    #[error("could not open the email client: {0}")]
    Launch(#[from] HostError),
}

/// Current form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = ContactField::ALL.into_iter().find(|f| self.field(*f).trim().is_empty()) {
            return Err(ContactError::MissingField(field));
        }
        let email = self.email.trim();
        let well_formed = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace));
        if !well_formed {
            return Err(ContactError::InvalidEmail(email.to_owned()));
        }
        Ok(())
    }

    /// Build the compose request addressed to `recipient`.
    pub fn compose(&self, recipient: &str) -> Result<MailComposeRequest, ContactError> {
        self.validate()?;
        Ok(MailComposeRequest {
            to: recipient.to_owned(),
            subject: self.subject.clone(),
            body: format!("Name: {}\nEmail: {}\n\nMessage:\n{}", self.name, self.email, self.message),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL.into_iter().all(|f| self.field(f).is_empty())
    }
}

/// Pre-filled message for the visitor's email client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailComposeRequest {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailComposeRequest {
    pub fn to_mailto_url(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.to,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

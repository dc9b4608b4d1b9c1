use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use serde::{Deserialize, Serialize};

/// How long the form pretends to be sending.
pub const SUBMIT_DELAY_MS: u32 = 1_500;
/// How long the success banner stays up.
pub const SUCCESS_BANNER_MS: u32 = 5_000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub newsletter: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    Required(ContactField),
    InvalidEmail,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Required(ContactField::Name) => "Name is required",
            Self::Required(ContactField::Email) => "Email is required",
            Self::Required(ContactField::Subject) => "Subject is required",
            Self::Required(ContactField::Message) => "Message is required",
            Self::InvalidEmail => "Invalid email format",
        };
        f.write_str(text)
    }
}

/// Field-level validation failures, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactErrors {
    errors: Vec<(ContactField, ContactError)>,
}

impl ContactErrors {
    pub fn get(&self, field: ContactField) -> Option<ContactError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, error)| *error)
    }

    /// Drop the error for `field`, e.g. once the user edits it again.
    pub fn clear(&mut self, field: ContactField) {
        self.errors.retain(|(f, _)| *f != field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    fn push(&mut self, field: ContactField, error: ContactError) {
        self.errors.push((field, error));
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactErrors> {
        let mut errors = ContactErrors::default();
        if self.name.trim().is_empty() {
            errors.push(ContactField::Name, ContactError::Required(ContactField::Name));
        }
        if self.email.trim().is_empty() {
            errors.push(ContactField::Email, ContactError::Required(ContactField::Email));
        } else if !is_valid_email(&self.email) {
            errors.push(ContactField::Email, ContactError::InvalidEmail);
        }
        if self.subject.trim().is_empty() {
            errors.push(
                ContactField::Subject,
                ContactError::Required(ContactField::Subject),
            );
        }
        if self.message.trim().is_empty() {
            errors.push(
                ContactField::Message,
                ContactError::Required(ContactField::Message),
            );
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

/// `local@domain.tld` shape: one `@`, no whitespace, a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Najwa".into(),
            email: "najwa@student.untan.ac.id".into(),
            subject: "Kolaborasi".into(),
            message: "Halo CloudSI!".into(),
            newsletter: false,
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_fields_are_required() {
        let errors = ContactForm::default().validate().expect_err("empty form");
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get(ContactField::Name),
            Some(ContactError::Required(ContactField::Name))
        );
        assert_eq!(
            errors.get(ContactField::Email).map(|e| e.to_string()).as_deref(),
            Some("Email is required")
        );
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        let form = ContactForm {
            subject: "   ".into(),
            ..filled()
        };
        let errors = form.validate().expect_err("blank subject");
        assert_eq!(
            errors.get(ContactField::Subject),
            Some(ContactError::Required(ContactField::Subject))
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_email_is_reported() {
        let form = ContactForm {
            email: "najwa@untan".into(),
            ..filled()
        };
        let mut errors = form.validate().expect_err("no tld");
        assert_eq!(errors.get(ContactField::Email), Some(ContactError::InvalidEmail));
        errors.clear(ContactField::Email);
        assert!(errors.is_empty());
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("cloudsi2025@untan.ac.id"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("a@b.c\n"));
    }

    #[test]
    fn domain_may_start_with_a_dot_when_another_follows() {
        assert!(is_valid_email("a@.b.c"));
        assert!(is_valid_email("nama.lengkap+cloudsi@mail.untan.ac.id"));
        assert!(!is_valid_email("a@b c.d"));
    }
}

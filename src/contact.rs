//! Contact form model: field validation and the simulated submission state machine.
//!
//! ```text
//! idle --submit--> validating --invalid--> idle (errors shown)
//!                            \--valid----> submitting --done--> idle (cleared on success)
//! ```
//!
//! No message ever leaves the browser; [`simulated_delivery`] stands in for a transport.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::config::MIN_MESSAGE_LEN;
use crate::notify::ToastKind;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Subject is required")]
    SubjectRequired,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

impl ValidationError {
    pub fn field(self) -> Field {
        match self {
            Self::NameRequired => Field::Name,
            Self::EmailRequired | Self::EmailInvalid => Field::Email,
            Self::SubjectRequired => Field::Subject,
            Self::MessageRequired | Self::MessageTooShort => Field::Message,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a message is already being sent")]
    InFlight,
    #[error("{0} field(s) need attention")]
    Invalid(usize),
    #[error("Failed to send message. Please try again.")]
    Delivery,
}

/// At most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    name: Option<ValidationError>,
    email: Option<ValidationError>,
    subject: Option<ValidationError>,
    message: Option<ValidationError>,
}

impl FieldErrors {
    fn slot(&mut self, field: Field) -> &mut Option<ValidationError> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Subject => self.subject,
            Field::Message => self.message,
        }
    }

    pub fn insert(&mut self, err: ValidationError) {
        *self.slot(err.field()) = Some(err);
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    pub fn len(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Check every field, collecting one error per failing field.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(ValidationError::NameRequired);
        }

        if self.email.trim().is_empty() {
            errors.insert(ValidationError::EmailRequired);
        } else if !is_valid_email(&self.email) {
            errors.insert(ValidationError::EmailInvalid);
        }

        if self.subject.trim().is_empty() {
            errors.insert(ValidationError::SubjectRequired);
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.insert(ValidationError::MessageRequired);
        } else if message.chars().count() < MIN_MESSAGE_LEN {
            errors.insert(ValidationError::MessageTooShort);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Everything the contact view keeps between renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: FieldErrors,
    submitting: bool,
}

impl ContactState {
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Update a field; editing a field clears its own error and no other.
    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    /// Validate and, when valid, enter the submitting phase.
    ///
    /// Returns the snapshot to deliver. Invalid input records its errors and leaves every
    /// field untouched.
    pub fn begin_submit(&mut self) -> Result<ContactForm, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        match self.form.validate() {
            Ok(()) => {
                self.errors = FieldErrors::default();
                self.submitting = true;
                Ok(self.form.clone())
            }
            Err(errors) => {
                let count = errors.len();
                self.errors = errors;
                Err(SubmitError::Invalid(count))
            }
        }
    }

    /// Leave the submitting phase. Success clears the form; failure keeps it so the visitor
    /// can retry.
    pub fn finish_submit(&mut self, outcome: &Result<(), SubmitError>) {
        self.submitting = false;
        if outcome.is_ok() {
            self.form = ContactForm::default();
        }
    }
}

/// Toast announcing a delivery outcome.
pub fn delivery_notice(outcome: &Result<(), SubmitError>) -> (ToastKind, String) {
    match outcome {
        Ok(()) => (ToastKind::Success, SUCCESS_MESSAGE.to_string()),
        Err(e) => (ToastKind::Error, e.to_string()),
    }
}

/// Stand-in transport. Nothing is sent, so delivery cannot fail.
pub fn simulated_delivery(form: &ContactForm) -> Result<(), SubmitError> {
    log::info!(
        "contact form accepted (not sent): {} <{}> re {:?}",
        form.name.trim(),
        form.email.trim(),
        form.subject.trim()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastQueue;

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    fn only_error(errors: &FieldErrors) -> (Field, ValidationError) {
        assert_eq!(errors.len(), 1, "expected exactly one error, got {errors:?}");
        Field::ALL
            .into_iter()
            .find_map(|f| errors.get(f).map(|e| (f, e)))
            .expect("one error should be present")
    }

    #[test]
    fn test_valid_form() {
        assert_eq!(form("Jo", "a@b.com", "Hi", "Hello there!").validate(), Ok(()));
    }

    #[test]
    fn test_missing_name_only() {
        let errors = form("", "a@b.com", "Hi", "Hello there!")
            .validate()
            .expect_err("name is empty");
        let (field, err) = only_error(&errors);
        assert_eq!(field, Field::Name);
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn test_bad_email_only() {
        let errors = form("Jo", "not-an-email", "Hi", "Hello there!")
            .validate()
            .expect_err("email is malformed");
        let (field, err) = only_error(&errors);
        assert_eq!(field, Field::Email);
        assert_eq!(err, ValidationError::EmailInvalid);
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let errors = form("   ", " ", "\t", "  \n ").validate().expect_err("all blank");
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some(ValidationError::NameRequired));
        assert_eq!(errors.get(Field::Email), Some(ValidationError::EmailRequired));
        assert_eq!(errors.get(Field::Subject), Some(ValidationError::SubjectRequired));
        assert_eq!(errors.get(Field::Message), Some(ValidationError::MessageRequired));
    }

    #[test]
    fn test_message_length_after_trim() {
        let errors = form("Jo", "a@b.com", "Hi", "   too short   ".trim_end())
            .validate()
            .expect_err("9 characters once trimmed");
        assert_eq!(errors.get(Field::Message), Some(ValidationError::MessageTooShort));
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "Message must be at least 10 characters long"
        );

        assert!(form("Jo", "a@b.com", "Hi", "  0123456789  ").validate().is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn test_email_checked_untrimmed() {
        let errors = form("Jo", " a@b.com", "Hi", "Hello there!")
            .validate()
            .expect_err("leading space breaks the address shape");
        assert_eq!(errors.get(Field::Email), Some(ValidationError::EmailInvalid));
    }

    #[test]
    fn test_invalid_submit_keeps_fields() {
        let mut state = ContactState::default();
        state.edit(Field::Email, "a@b.com".to_string());
        state.edit(Field::Subject, "Hi".to_string());
        state.edit(Field::Message, "Hello there!".to_string());
        let before = state.form.clone();

        assert_eq!(state.begin_submit(), Err(SubmitError::Invalid(1)));
        assert!(!state.is_submitting());
        assert_eq!(state.form, before);
        assert_eq!(state.errors.get(Field::Name), Some(ValidationError::NameRequired));
    }

    #[test]
    fn test_edit_clears_only_its_error() {
        let mut state = ContactState::default();
        assert!(state.begin_submit().is_err());
        assert_eq!(state.errors.len(), 4);

        state.edit(Field::Name, "J".to_string());
        assert_eq!(state.errors.get(Field::Name), None);
        assert_eq!(state.errors.len(), 3);
    }

    #[test]
    fn test_successful_submission_flow() {
        let mut state = ContactState {
            form: form("Jo", "a@b.com", "Hi", "Hello there!"),
            ..Default::default()
        };
        let mut toasts = ToastQueue::default();

        let snapshot = state.begin_submit().expect("valid form should submit");
        assert!(state.is_submitting());
        assert_eq!(snapshot.name, "Jo");

        // submit stays blocked for the whole delay
        assert_eq!(state.begin_submit(), Err(SubmitError::InFlight));
        assert_eq!(state.form, snapshot);

        let outcome = simulated_delivery(&snapshot);
        state.finish_submit(&outcome);
        let (kind, message) = delivery_notice(&outcome);
        toasts.push(kind, message);

        assert!(!state.is_submitting());
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.items()[0].kind, ToastKind::Success);
        assert_eq!(toasts.items()[0].message, SUCCESS_MESSAGE);
    }

    #[test]
    fn test_failed_delivery_keeps_fields() {
        let filled = form("Jo", "a@b.com", "Hi", "Hello there!");
        let mut state = ContactState {
            form: filled.clone(),
            ..Default::default()
        };
        state.begin_submit().expect("valid form should submit");

        let outcome = Err(SubmitError::Delivery);
        state.finish_submit(&outcome);
        let (kind, message) = delivery_notice(&outcome);
        assert_eq!(kind, ToastKind::Error);
        assert_eq!(message, "Failed to send message. Please try again.");
        assert_eq!(state.form, filled);
        assert!(!state.is_submitting());

        // and the visitor can try again
        assert!(state.begin_submit().is_ok());
    }
}

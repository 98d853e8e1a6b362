//! Contact form state.

use crate::domain::{normalize_country_code, Field, FieldUpdate};
use shared_types::ContactSubmission;
use tracing::debug;

/// Initial (and post-reset) country code.
const INITIAL_COUNTRY_CODE: &str = "+";

/// Editable contact form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    first_name: String,
    last_name: String,
    country_code: String,
    phone: String,
    email: String,
    topic: String,
    message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            country_code: INITIAL_COUNTRY_CODE.to_string(),
            phone: String::new(),
            email: String::new(),
            topic: String::new(),
            message: String::new(),
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an edit for `field`, normalizing it first.
    ///
    /// Only the country code is normalized; an edit that would make it
    /// longer than five characters is rejected and the old value kept.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> FieldUpdate {
        let value = value.into();
        match field {
            Field::CountryCode => match normalize_country_code(&value) {
                Some(normalized) => self.country_code = normalized,
                None => {
                    debug!(raw = %value, "Country code edit rejected");
                    return FieldUpdate::Rejected;
                }
            },
            other => *self.slot_mut(other) = value,
        }
        FieldUpdate::Accepted
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> FieldUpdate {
        self.set(Field::FirstName, value)
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> FieldUpdate {
        self.set(Field::LastName, value)
    }

    pub fn set_country_code(&mut self, value: impl Into<String>) -> FieldUpdate {
        self.set(Field::CountryCode, value)
    }

    pub fn set_phone(&mut self, value: impl Into<String>) -> FieldUpdate {
        self.set(Field::Phone, value)
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> FieldUpdate {
        self.set(Field::Email, value)
    }

    pub fn set_topic(&mut self, value: impl Into<String>) -> FieldUpdate {
        self.set(Field::Topic, value)
    }

    pub fn set_message(&mut self, value: impl Into<String>) -> FieldUpdate {
        self.set(Field::Message, value)
    }

    /// Current raw value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::CountryCode => &self.country_code,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Topic => &self.topic,
            Field::Message => &self.message,
        }
    }

    /// True iff every required field is non-blank after trimming.
    pub fn validate(&self) -> bool {
        Field::REQUIRED
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }

    /// Required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::REQUIRED
            .iter()
            .copied()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Restore every field to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the wire record from trimmed field values.
    pub fn to_submission(&self, bot_check_token: impl Into<String>) -> ContactSubmission {
        ContactSubmission {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            country_code: self.country_code.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            topic: self.topic.trim().to_string(),
            message: self.message.trim().to_string(),
            bot_check_token: bot_check_token.into(),
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::CountryCode => &mut self.country_code,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Topic => &mut self.topic,
            Field::Message => &mut self.message,
        }
    }
}

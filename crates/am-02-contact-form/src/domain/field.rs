//! Form fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One editable field of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    CountryCode,
    Phone,
    Email,
    Topic,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::CountryCode,
        Field::Phone,
        Field::Email,
        Field::Topic,
        Field::Message,
    ];

    /// Fields that must be non-blank before a submission is attempted.
    pub const REQUIRED: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Topic,
        Field::Message,
    ];

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::CountryCode => "Country Code",
            Field::Phone => "Phone Number",
            Field::Email => "Email",
            Field::Topic => "Topic",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of a field edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldUpdate {
    /// The (normalized) value was stored
    Accepted,
    /// The edit was ignored and the previous value kept
    Rejected,
}

impl FieldUpdate {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FieldUpdate::Accepted)
    }
}

//! # Form State Controller
//!
//! **Subsystem ID:** 2
//!
//! Owns the editable contact form fields, normalizes input as it is typed
//! and decides whether the form is complete enough to submit.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Country code starts with `+` | `domain/normalize.rs` - `normalize_country_code()` |
//! | INVARIANT-2 | Country code is at most 5 chars | `domain/normalize.rs` - over-long edits rejected |
//! | INVARIANT-3 | Required fields non-blank before submit | `form.rs` - `validate()` |
//!
//! Required fields: first name, last name, email, topic, message. Phone and
//! country code are optional.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod form;

pub use domain::{normalize_country_code, Field, FieldUpdate, COUNTRY_CODE_MAX_LEN};
pub use form::ContactForm;

//! # Shared Types Crate
//!
//! Wire types for the `/api/contact` contract, shared by the submission
//! client (`am-03`) and the contact endpoint (`am-04`).
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the JSON shape of a contact submission and
//!   of every endpoint response is defined here and nowhere else.
//! - **Fixed Protocol Text**: user-visible error strings are part of the
//!   externally observable API and live in [`messages`].

pub mod contact;
pub mod messages;
pub mod notification;

pub use contact::{ContactSubmission, ErrorBody, SubmissionAck};
pub use notification::NotificationKind;

/// Path of the contact endpoint.
pub const CONTACT_PATH: &str = "/api/contact";

/// Bot-check action name the client requests tokens for.
pub const BOT_CHECK_ACTION: &str = "contact_form";

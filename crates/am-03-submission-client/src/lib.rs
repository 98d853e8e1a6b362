//! # Submission Client
//!
//! **Subsystem ID:** 3
//!
//! Drives one contact submission attempt from the browser side of the
//! pipeline and reports its outcome to the Notification Center.
//!
//! ## Attempt Flow
//!
//! ```text
//! [IDLE] ──submit()──→ [IN_FLIGHT] ──validate──→ token ──→ POST /api/contact ──→ interpret
//!    ↑                      │                                                       │
//!    │                      └── submit() while in flight → AlreadySending (no-op)   │
//!    └──────────────────── exactly one notification, guard released ←──────────────┘
//! ```
//!
//! | Step | Failure | Notification |
//! |------|---------|--------------|
//! | validate | `Validation` | "All fields are required." |
//! | token | `ProviderUnavailable` | "reCAPTCHA not ready." |
//! | send | `Network` | "Failed to send message." |
//! | interpret 400 / 403 / other | `ServerValidation` / `BotCheck` / `ServerFault` | endpoint's `error` text |
//! | success | - | "Message sent successfully." and form reset |
//!
//! ## Outbound Dependencies
//!
//! | Port | Purpose | Adapter |
//! |------|---------|---------|
//! | `BotCheckProvider` | Token for the `contact_form` action | `StaticTokenProvider` (or a browser bridge) |
//! | `ContactTransport` | POST the submission | `HttpContactTransport` (reqwest) |

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{HttpContactTransport, StaticTokenProvider};
pub use domain::{ProviderError, SubmissionError, TransportError};
pub use ports::{BotCheckProvider, ContactTransport, TransportResponse};
pub use service::{interpret_response, SubmissionClient};

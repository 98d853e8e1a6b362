//! # Notification Center
//!
//! **Subsystem ID:** 1
//!
//! Holds a small ordered collection of transient messages reporting the
//! outcome of contact submissions. Each message expires on its own after
//! the configured display duration (3 seconds by default).
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement Location |
//! |----|-----------|---------------------|
//! | INVARIANT-1 | Ids are unique and monotonic per center | `service.rs` - `next_id` counter |
//! | INVARIANT-2 | Insertion order, oldest first | `service.rs` - `push()` appends |
//! | INVARIANT-3 | One expiry task per notification | `service.rs` - `schedule_expiry()` |
//! | INVARIANT-4 | Dismissal cancels the expiry task | `service.rs` - `dismiss()` aborts |
//!
//! ## Lifecycle
//!
//! ```text
//! push() ──→ [LIVE] ──dismiss()──→ [REMOVED]  (expiry task aborted)
//!               │
//!               └── display duration elapsed ──→ [REMOVED]
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use am_01_notifications::{NotificationCenter, NotificationConfig};
//! use shared_types::NotificationKind;
//!
//! let center = NotificationCenter::new(NotificationConfig::default());
//! let id = center.push(NotificationKind::Success, "Message sent successfully.");
//! center.dismiss(id);
//! ```

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod domain;
pub mod service;

pub use domain::{Notification, NotificationConfig, NotificationId};
pub use service::NotificationCenter;
pub use shared_types::NotificationKind;

//! Cross-crate flows: Form State Controller → Submission Client →
//! Submission Endpoint → Notification Center.

pub mod fixtures;

mod contact_flow;
mod loopback;

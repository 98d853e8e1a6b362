//! # Contact Pipeline Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── fixtures.rs       # Mock verifier/relay, in-process transport
//!     ├── contact_flow.rs   # Client → endpoint through the router
//!     └── loopback.rs       # Client → endpoint over real HTTP
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p am-tests
//! cargo test -p am-tests integration::loopback
//! ```

pub mod integration;

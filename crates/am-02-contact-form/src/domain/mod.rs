//! Domain types for the Form State Controller.

pub mod field;
pub mod normalize;

pub use field::{Field, FieldUpdate};
pub use normalize::{normalize_country_code, COUNTRY_CODE_MAX_LEN};

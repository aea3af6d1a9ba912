//! Domain value objects.
//!
//! Value objects validate at construction time so that malformed data
//! cannot be represented once it is past the boundary.

pub mod errors;
pub mod phone;

pub use errors::ValidationError;
pub use phone::{PhoneNumber, PHONE_DIGITS};

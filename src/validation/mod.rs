//! Checks that run after decoding
//!
//! [`structural`] enforces the required-field switches of [`ParseOptions`];
//! [`temporal`] checks the time window against a single `now`.
//!
//! [`ParseOptions`]: crate::options::ParseOptions

pub mod structural;
pub mod temporal;

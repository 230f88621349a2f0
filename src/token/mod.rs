// Internal modules
mod header;
mod raw;
#[allow(clippy::module_inception)]
mod token;

// Public API exports
pub use header::{Critical, Header};
pub use raw::RawToken;
pub use token::Token;

//! DNS MX resolution.
//!
//! The public entry point is [`check_mx`], which normalizes a domain via
//! IDNA and performs a single async lookup against a [`LookupMx`]
//! capability, returning a [`MxStatus`] describing the outcome. The
//! capability is a trait so callers (and tests) decide where answers come
//! from; [`system_resolver`] builds the production implementation from the
//! system resolver configuration.

mod error;
mod resolver;
mod types;

pub use error::MxError as Error;
pub use resolver::{LookupMx, check_mx, system_resolver};
pub use types::{MxRecord, MxStatus};

#![forbid(unsafe_code)]
//! mxcheck — email domain deliverability checks over DNS MX records.
//!
//! Three layers: [`validator`] extracts the domain part of an address,
//! [`mx`] resolves MX records through an injectable [`mx::LookupMx`]
//! capability, and [`http`] wires both into a stateless `POST /validate`
//! endpoint hosted by the `mxcheck-server` binary.

pub mod check;
pub mod http;
pub mod mx;
pub mod validator;

pub use check::email_has_mx;
pub use mx::{Error as MxError, LookupMx, MxRecord, MxStatus, check_mx, system_resolver};
pub use validator::domain_part;

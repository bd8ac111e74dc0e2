//! Deliverability verdicts.
//!
//! Collapses every resolution outcome to a single boolean: a domain is
//! "deliverable" only when at least one MX record comes back. Missing `@`,
//! empty or unconvertible domains, zero records and resolver failures all
//! read as `false` — external callers depend on the two-outcome shape, so
//! the individual causes are only logged, never surfaced.

use tracing::debug;

use crate::mx::{self, LookupMx, MxStatus};
use crate::validator;

/// Does `email`'s domain publish at least one MX record?
pub async fn email_has_mx<R>(resolver: &R, email: &str) -> bool
where
    R: LookupMx + ?Sized,
{
    let Some(domain) = validator::domain_part(email) else {
        debug!(email, "address has no domain part");
        return false;
    };

    match mx::check_mx(resolver, domain).await {
        Ok(MxStatus::Records(records)) => {
            debug!(domain, count = records.len(), "MX records found");
            true
        }
        Ok(MxStatus::NoRecords) => {
            debug!(domain, "domain publishes no MX records");
            false
        }
        Err(err) => {
            debug!(domain, %err, "MX resolution failed");
            false
        }
    }
}

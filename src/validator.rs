//! Domain extraction from raw email strings.
//!
//! Deliberately naive: the domain is whatever follows the first `@`, with no
//! validation of the local part and no rejection of further `@` characters.
//! Addresses that fail here are reported as "not valid", never as a request
//! error.

/// Returns the substring following the first `@`, or `None` when the string
/// contains no `@` at all.
///
/// `"user@"` yields `Some("")`; rejecting the empty domain is left to the
/// MX layer.
pub fn domain_part(email: &str) -> Option<&str> {
    let (_, domain) = email.split_once('@')?;
    Some(domain)
}

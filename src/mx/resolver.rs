use async_trait::async_trait;
use trust_dns_resolver::{TokioAsyncResolver, error::ResolveError};

use super::{Error, MxRecord, MxStatus};

/// MX lookup capability, injectable so handlers can be exercised with a
/// deterministic stub instead of live DNS.
#[async_trait]
pub trait LookupMx: Send + Sync {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError>;
}

/// Lookup MX records for `domain` using the given resolver.
///
/// The domain is normalized via IDNA before querying DNS. The resulting
/// [`MxStatus`] contains the sorted, deduplicated list of records
/// (ascending preference). One query, no cache, no retry.
pub async fn check_mx<R>(resolver: &R, domain: &str) -> Result<MxStatus, Error>
where
    R: LookupMx + ?Sized,
{
    let ascii = normalize_domain(domain)?;
    resolve_with(resolver, &ascii).await
}

/// Build the async resolver from the host's resolver configuration
/// (`/etc/resolv.conf` or platform equivalent).
pub fn system_resolver() -> Result<TokioAsyncResolver, Error> {
    TokioAsyncResolver::tokio_from_system_conf().map_err(Error::resolver_init)
}

pub(crate) async fn resolve_with<R>(resolver: &R, ascii_domain: &str) -> Result<MxStatus, Error>
where
    R: LookupMx + ?Sized,
{
    let mut records = resolver.lookup_mx(ascii_domain).await.map_err(Error::lookup)?;

    records.sort();
    records.dedup();

    if records.is_empty() {
        Ok(MxStatus::NoRecords)
    } else {
        Ok(MxStatus::Records(records))
    }
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(Error::idna)
}

pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}

#[async_trait]
impl LookupMx for TokioAsyncResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolveError> {
        let lookup = TokioAsyncResolver::mx_lookup(self, domain).await?;
        let mut records = Vec::new();
        for mx in lookup.iter() {
            let exchange = normalize_exchange(mx.exchange().to_utf8());
            records.push(MxRecord::new(mx.preference(), exchange));
        }
        Ok(records)
    }
}

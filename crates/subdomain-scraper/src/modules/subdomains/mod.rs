pub mod crtsh;

use super::Module;
use crate::domain::is_hostname;
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// One certificate entry as returned by a CT aggregator. Only the names
/// field is kept, it may hold several hostnames separated by newlines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CertificateRecord {
    pub name_value: String,
}

#[async_trait]
pub trait CertificateSource: Module {
    /// Where the query is sent, shown to the operator.
    fn endpoint(&self) -> &str;

    async fn fetch(&self, http_client: &Client, domain: &str) -> Result<Vec<CertificateRecord>>;
}

/// Lowercased, wildcard-free hostnames under `domain`, deduplicated and sorted.
pub fn normalize(records: &[CertificateRecord], domain: &str) -> BTreeSet<String> {
    let suffix = format!(".{}", domain);

    let subdomains: BTreeSet<String> = records
        .iter()
        .flat_map(|record| record.name_value.split(['\n', '\r']))
        .map(|name| name.trim().to_lowercase())
        .map(|name| name.trim_start_matches("*.").to_string())
        .filter(|name| !name.is_empty() && !name.contains('*'))
        .filter(|name| is_hostname(name))
        .filter(|name| name.as_str() == domain || name.ends_with(&suffix))
        .inspect(|name| trace!("Collecting: {:?}", name))
        .collect();

    debug!("{} unique subdomains", subdomains.len());
    subdomains
}

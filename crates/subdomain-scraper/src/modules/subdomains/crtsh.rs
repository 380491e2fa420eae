use super::{CertificateRecord, CertificateSource};
use crate::modules::{http_request, Module};
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

pub const CRTSH_ENDPOINT: &str = "https://crt.sh/";

// region:        --- Module info

pub struct CrtSh {
    endpoint: String,
}

impl CrtSh {
    pub fn new() -> Self {
        Self::with_endpoint(CRTSH_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Module for CrtSh {
    fn name(&self) -> String {
        "subdomains/crtsh".to_string()
    }

    fn description(&self) -> String {
        "Use crt.sh/ certificate transparency logs to find subdomains".to_string()
    }
}

// endregion:     --- Module info

#[async_trait]
impl CertificateSource for CrtSh {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[instrument(name = "fetch", level = "debug", fields(module = %self.name()), skip_all)]
    async fn fetch(&self, http_client: &Client, domain: &str) -> Result<Vec<CertificateRecord>> {
        let request = http_client
            .get(&self.endpoint)
            .query(&[("q", domain), ("output", "json")]);
        let res = http_request(request).await?;
        let body = res.text().await?;

        let records = parse_records(&body)?;
        debug!("{} records received", records.len());
        Ok(records)
    }
}

/// The body must be a JSON array of objects carrying `name_value`.
pub fn parse_records(body: &str) -> Result<Vec<CertificateRecord>> {
    Ok(serde_json::from_str(body)?)
}

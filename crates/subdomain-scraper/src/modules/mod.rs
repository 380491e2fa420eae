pub mod subdomains;

use crate::{Error, Result};
use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, info, instrument};

pub trait Module {
    fn name(&self) -> String;
    fn description(&self) -> String;
}

/// Builds the single HTTP client used for a run.
pub fn new_http_client(timeout: Duration) -> Result<Client> {
    let http_client = Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()?;
    debug!("HTTP Client created: {:?}", http_client);
    Ok(http_client)
}

// region:        --- HTTP requests

/// Sends the request and fails on transport errors or a non 2xx status.
#[instrument(name = "HTTP_request", level = "info", skip_all)]
pub async fn http_request(request: RequestBuilder) -> Result<Response> {
    info!("Sending request");
    let res = match request.send().await {
        Ok(res) => res,
        Err(err) => {
            debug!("Reason: {}", err);
            return Err(Error::Network(err));
        }
    };

    info!("Receive with status: {}", res.status());
    debug!("Response: {:?}", res);

    if !res.status().is_success() {
        return Err(Error::HttpStatus {
            status: res.status().as_u16(),
            url: res.url().to_string(),
        });
    }

    Ok(res)
}

// endregion:     --- HTTP requests

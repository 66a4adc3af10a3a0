//! HTTP prober and transport setup

pub mod resolver;


use crate::{
    error::{AppError, Result},
    models::{config::original_authority, ProbeResult, TransportConfig},
};
use async_trait::async_trait;
use reqwest::{header::HOST, redirect, Client, Request, Url};
use resolver::PinnedResolver;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Something that can time a single GET against a URL.
///
/// Implementations never fail: errors are folded into the returned
/// [`ProbeResult`] together with the time spent before the failure.
#[async_trait]
pub trait Prober: Send + Sync + 'static {
    async fn probe(&self, url: &str) -> ProbeResult;
}

/// Build the run-wide HTTP client from the transport settings.
///
/// Redirects are never followed so a probe measures only the first
/// response. Idle pooling is disabled so each probe releases its
/// connection once the body has been drained.
pub fn build_client(transport: &TransportConfig) -> Result<Client> {
    let mut builder = Client::builder()
        .redirect(redirect::Policy::none())
        .danger_accept_invalid_certs(transport.skip_tls_verify)
        .pool_max_idle_per_host(0)
        .connect_timeout(crate::defaults::DEFAULT_CONNECT_TIMEOUT)
        .no_proxy()
        .user_agent(USER_AGENT);

    if let Some(ip) = transport.ip_override {
        builder = builder.dns_resolver(Arc::new(PinnedResolver::new(ip)));
    }

    builder
        .build()
        .map_err(|e| AppError::network(format!("Failed to create HTTP client: {}", e)))
}

/// Prober backed by one shared `reqwest` client
#[derive(Clone)]
pub struct HttpProber {
    client: Client,
    transport: TransportConfig,
}

impl HttpProber {
    pub fn new(transport: TransportConfig) -> Result<Self> {
        let client = build_client(&transport)?;
        Ok(Self { client, transport })
    }

    fn build_request(&self, url: &str) -> Result<Request> {
        let parsed = Url::parse(url)?;

        let request = match self.transport.request_target(&parsed)? {
            Some(target) => {
                let authority = original_authority(&parsed)
                    .ok_or_else(|| AppError::validation(format!("url {} must have a host", url)))?;
                self.client.get(target).header(HOST, authority)
            }
            None => self.client.get(parsed),
        };

        Ok(request.build()?)
    }

    async fn execute(&self, url: &str) -> Result<u16> {
        let request = self.build_request(url)?;
        let mut response = self.client.execute(request).await?;
        let status = response.status().as_u16();

        let mut body_bytes = 0usize;
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| AppError::http_request(format!("Failed to read response body: {}", e)))?
        {
            body_bytes += chunk.len();
        }

        debug!(url, status, body_bytes, "response drained");
        Ok(status)
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> ProbeResult {
        let start = Instant::now();
        let outcome = self.execute(url).await;
        let elapsed = start.elapsed();

        match outcome {
            Ok(status) => ProbeResult::success(url, elapsed, status),
            Err(error) => {
                warn!(url, ?elapsed, %error, "probe failed");
                ProbeResult::failed(url, elapsed, error)
            }
        }
    }
}

//! DTDC domestic tracking endpoint.
//!
//! The endpoint is a WordPress JSON route that only answers requests that
//! look like they came from the public tracking page, hence the browser-style
//! `Origin`, `Referer`, `Sec-Ch-Ua-Platform` and `User-Agent` headers.

use async_trait::async_trait;
use dtrack_core::config::CarrierConfig;
use dtrack_core::{CarrierReply, Transport, TransportError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, REFERER};

const SEC_CH_UA_PLATFORM: HeaderName = HeaderName::from_static("sec-ch-ua-platform");

/// HTTP client for one configured DTDC endpoint.
#[derive(Debug, Clone)]
pub struct DtdcClient {
    client: reqwest::Client,
    url: String,
}

impl DtdcClient {
    pub fn new(config: &CarrierConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        if let Ok(origin) = HeaderValue::from_str(&config.origin) {
            headers.insert(ORIGIN, origin);
        }
        if let Ok(referer) = HeaderValue::from_str(&config.referer) {
            headers.insert(REFERER, referer);
        }
        if let Ok(platform) = HeaderValue::from_str(&config.platform) {
            headers.insert(SEC_CH_UA_PLATFORM, platform);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl Transport for DtdcClient {
    async fn send(&self, payload: &[u8]) -> Result<CarrierReply, TransportError> {
        let res = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.to_vec())
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = res.status().as_u16();
        tracing::debug!(url = %self.url, status, "carrier responded");

        let body = res.bytes().await.map_err(|e| TransportError::Body {
            status,
            message: e.to_string(),
        })?;

        Ok(CarrierReply {
            status,
            body: body.to_vec(),
        })
    }
}

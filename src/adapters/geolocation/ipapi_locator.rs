//! ipapi.co geolocation adapter.
//!
//! Free tier, no API key. Responses carry `"error": true` when rate limited.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::net::IpAddr;
use std::time::Duration;

use crate::domain::quiz::Geography;
use crate::ports::{is_public_ip, GeoLocator};

/// Looks up city and country through ipapi.co.
pub struct IpApiLocator {
    client: Client,
    base_url: String,
}

impl IpApiLocator {
    pub const DEFAULT_BASE_URL: &'static str = "https://ipapi.co";

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn lookup_url(&self, ip: &IpAddr) -> String {
        format!("{}/{}/json/", self.base_url.trim_end_matches('/'), ip)
    }

    async fn fetch(&self, ip: &IpAddr) -> Result<Geography, String> {
        let response = self
            .client
            .get(self.lookup_url(ip))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !response.status().is_success() {
            return Err(format!("status {}", response.status()));
        }

        let body: IpApiResponse = response.json().await.map_err(|e| e.to_string())?;
        if body.error {
            return Err(body.reason.unwrap_or_else(|| "error flag set".to_string()));
        }

        Ok(Geography::new(body.city, body.country_name))
    }
}

#[async_trait]
impl GeoLocator for IpApiLocator {
    async fn lookup(&self, ip: Option<IpAddr>) -> Geography {
        let Some(ip) = ip.filter(is_public_ip) else {
            return Geography::unknown();
        };

        match self.fetch(&ip).await {
            Ok(geography) => geography,
            Err(reason) => {
                tracing::debug!(%ip, %reason, "Geolocation lookup failed");
                Geography::unknown()
            }
        }
    }
}

/// Returns [`Geography::unknown`] for every lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopGeoLocator;

#[async_trait]
impl GeoLocator for NoopGeoLocator {
    async fn lookup(&self, _ip: Option<IpAddr>) -> Geography {
        Geography::unknown()
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    #[serde(default)]
    error: bool,
    reason: Option<String>,
    city: Option<String>,
    country_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    async fn fake_ipapi(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route(
            "/:ip/json/",
            get(move || async move { (status, [("content-type", "application/json")], body) }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        base
    }

    fn public_ip() -> Option<IpAddr> {
        Some("8.8.8.8".parse().unwrap())
    }

    #[tokio::test]
    async fn reads_city_and_country_name() {
        let base = fake_ipapi(
            StatusCode::OK,
            r#"{"ip": "8.8.8.8", "city": "Mountain View", "country_name": "United States"}"#,
        )
        .await;
        let locator = IpApiLocator::new(base, Duration::from_secs(2)).unwrap();

        let geo = locator.lookup(public_ip()).await;
        assert_eq!(geo.to_string(), "Mountain View, United States");
    }

    #[tokio::test]
    async fn error_flag_yields_unknown() {
        let base = fake_ipapi(StatusCode::OK, r#"{"error": true, "reason": "RateLimited"}"#).await;
        let locator = IpApiLocator::new(base, Duration::from_secs(2)).unwrap();

        assert!(locator.lookup(public_ip()).await.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_yields_unknown() {
        let base = fake_ipapi(StatusCode::TOO_MANY_REQUESTS, "{}").await;
        let locator = IpApiLocator::new(base, Duration::from_secs(2)).unwrap();

        assert!(locator.lookup(public_ip()).await.is_empty());
    }

    #[tokio::test]
    async fn private_or_missing_ip_skips_lookup() {
        let locator = IpApiLocator::new("http://127.0.0.1:1", Duration::from_millis(200)).unwrap();

        assert!(locator.lookup(None).await.is_empty());
        assert!(locator.lookup(Some("192.168.1.10".parse().unwrap())).await.is_empty());
    }

    #[test]
    fn builds_lookup_url() {
        let locator = IpApiLocator::new("https://ipapi.co/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            locator.lookup_url(&"1.2.3.4".parse().unwrap()),
            "https://ipapi.co/1.2.3.4/json/"
        );
    }

    #[tokio::test]
    async fn noop_locator_knows_nothing() {
        assert!(NoopGeoLocator.lookup(public_ip()).await.is_empty());
    }
}

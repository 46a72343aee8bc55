//! Geo Locator Port - coarse location lookup for an IP address.

use async_trait::async_trait;
use std::net::IpAddr;

use crate::domain::quiz::Geography;

/// Port for IP geolocation.
///
/// Lookups are best effort and infallible: any failure yields
/// [`Geography::unknown`].
#[async_trait]
pub trait GeoLocator: Send + Sync {
    async fn lookup(&self, ip: Option<IpAddr>) -> Geography;
}

/// Whether `ip` is routable on the public internet.
///
/// Private, loopback, link-local and unspecified addresses cannot be located.
pub fn is_public_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => {
            !(v4.is_private()
                || v4.is_loopback()
                || v4.is_link_local()
                || v4.is_unspecified()
                || v4.is_broadcast()
                || v4.is_documentation())
        }
        IpAddr::V6(v6) => {
            let unique_local = (v6.segments()[0] & 0xfe00) == 0xfc00;
            let link_local = (v6.segments()[0] & 0xffc0) == 0xfe80;
            !(v6.is_loopback() || v6.is_unspecified() || unique_local || link_local)
        }
    }
}

//! IP geolocation adapters.

mod ipapi_locator;

pub use ipapi_locator::{IpApiLocator, NoopGeoLocator};

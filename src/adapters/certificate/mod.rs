//! Certificate rendering adapters.

mod svg_renderer;

pub use svg_renderer::SvgCertificateRenderer;

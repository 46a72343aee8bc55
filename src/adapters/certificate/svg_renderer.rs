//! SVG certificate renderer.
//!
//! Draws the 1000x630 landscape certificate as a self-contained SVG document.
//! Fonts fall back to common system serif/sans families.

use std::fmt::Write;

use crate::domain::certificate::Certificate;
use crate::ports::{CertificateRenderer, RenderError, RenderedCertificate};

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 630;
const CENTER_X: u32 = WIDTH / 2;
/// Characters per line for the personalized description.
const DESCRIPTION_WRAP: usize = 64;

const SERIF: &str = "'Playfair Display', Georgia, serif";
const SANS: &str = "Inter, -apple-system, Helvetica, Arial, sans-serif";

/// Renders certificates as SVG images.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgCertificateRenderer;

impl SvgCertificateRenderer {
    fn svg(certificate: &Certificate) -> Result<String, std::fmt::Error> {
        let name = escape_xml(&certificate.holder_name);
        let profile = escape_xml(certificate.profile.display_name());
        let id = escape_xml(certificate.certificate_id.as_str());
        let description = wrap_words(&certificate.personalized_description(), DESCRIPTION_WRAP);

        let mut svg = String::with_capacity(4096);
        writeln!(
            svg,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"##,
            w = WIDTH,
            h = HEIGHT
        )?;
        svg.push_str(
            r##"  <defs>
    <radialGradient id="corner-tl" cx="0" cy="0" r="1">
      <stop offset="0" stop-color="#8FAFC8" stop-opacity="0.55"/>
      <stop offset="0.35" stop-color="#b0c8da" stop-opacity="0.4"/>
      <stop offset="0.7" stop-color="#ffffff" stop-opacity="0"/>
    </radialGradient>
    <radialGradient id="corner-br" cx="1" cy="1" r="1">
      <stop offset="0" stop-color="#8FAFC8" stop-opacity="0.55"/>
      <stop offset="0.35" stop-color="#b0c8da" stop-opacity="0.4"/>
      <stop offset="0.7" stop-color="#ffffff" stop-opacity="0"/>
    </radialGradient>
  </defs>
"##,
        );
        writeln!(
            svg,
            r##"  <rect x="0.75" y="0.75" width="{}" height="{}" fill="#ffffff" stroke="#c8d6e0" stroke-width="1.5"/>"##,
            WIDTH as f32 - 1.5,
            HEIGHT as f32 - 1.5
        )?;
        writeln!(svg, r##"  <rect x="0" y="0" width="220" height="220" fill="url(#corner-tl)"/>"##)?;
        writeln!(
            svg,
            r##"  <rect x="{}" y="{}" width="220" height="220" fill="url(#corner-br)"/>"##,
            WIDTH - 220,
            HEIGHT - 220
        )?;
        writeln!(
            svg,
            r##"  <rect x="14" y="14" width="{}" height="{}" fill="none" stroke="#d4e2ec"/>"##,
            WIDTH - 28,
            HEIGHT - 28
        )?;

        // Header
        writeln!(
            svg,
            r##"  <text x="{x}" y="70" text-anchor="middle" font-family="{SANS}" font-size="11" font-weight="500" letter-spacing="3" fill="#7a9ab2">AI SENSE CHECK CERTIFICATION</text>"##,
            x = CENTER_X
        )?;
        writeln!(
            svg,
            r##"  <text x="{x}" y="128" text-anchor="middle" font-family="{SERIF}" font-size="46" fill="#1a3050">Certificate <tspan font-style="italic">of</tspan> AI Thinking</text>"##,
            x = CENTER_X
        )?;
        writeln!(
            svg,
            r##"  <line x1="{}" y1="152" x2="{}" y2="152" stroke="#c8d8e4"/>"##,
            CENTER_X - 180,
            CENTER_X + 180
        )?;

        // Holder
        writeln!(
            svg,
            r##"  <text x="{x}" y="208" text-anchor="middle" font-family="{SANS}" font-size="14" font-style="italic" fill="#7a9ab2">This certifies that</text>"##,
            x = CENTER_X
        )?;
        writeln!(
            svg,
            r##"  <text x="{x}" y="258" text-anchor="middle" font-family="{SERIF}" font-size="38" font-weight="700" fill="#1a3050">{name}</text>"##,
            x = CENTER_X
        )?;
        writeln!(
            svg,
            r##"  <text x="{x}" y="298" text-anchor="middle" font-family="{SANS}" font-size="13" fill="#4a6070"><tspan x="{x}">has completed the AI Sense Check and demonstrated a strong</tspan><tspan x="{x}" dy="21">perspective on how AI works in real environments.</tspan></text>"##,
            x = CENTER_X
        )?;
        writeln!(
            svg,
            r##"  <line x1="{}" y1="348" x2="{}" y2="348" stroke="#dde8ef"/>"##,
            CENTER_X - 130,
            CENTER_X + 130
        )?;

        // Profile badge
        let badge_text = format!("AI Thinking Profile: {}", profile);
        let badge_width = 56 + badge_text.chars().count() as u32 * 8;
        writeln!(
            svg,
            r##"  <rect x="{}" y="368" width="{}" height="36" rx="18" fill="none" stroke="#5a8aaa" stroke-width="1.5"/>"##,
            CENTER_X.saturating_sub(badge_width / 2),
            badge_width
        )?;
        writeln!(
            svg,
            r##"  <text x="{x}" y="391" text-anchor="middle" font-family="{SANS}" font-size="13" font-weight="600" fill="#2a5a7a">{badge_text}</text>"##,
            x = CENTER_X
        )?;

        // Personalized description
        write!(
            svg,
            r##"  <text x="{x}" y="438" text-anchor="middle" font-family="{SANS}" font-size="13" fill="#4a6070">"##,
            x = CENTER_X
        )?;
        for (i, line) in description.iter().enumerate() {
            let dy = if i == 0 { 0 } else { 20 };
            write!(
                svg,
                r##"<tspan x="{x}" dy="{dy}">{}</tspan>"##,
                escape_xml(line),
                x = CENTER_X
            )?;
        }
        svg.push_str("</text>\n");

        // Footer
        writeln!(
            svg,
            r##"  <line x1="80" y1="560" x2="{}" y2="560" stroke="#dde8ef"/>"##,
            WIDTH - 80
        )?;
        writeln!(
            svg,
            r##"  <text x="{}" y="586" text-anchor="end" font-family="{SANS}" font-size="9" letter-spacing="0.3" fill="#9ab0c0">Certificate ID: {id}</text>"##,
            WIDTH - 80
        )?;
        svg.push_str("</svg>\n");

        Ok(svg)
    }
}

impl CertificateRenderer for SvgCertificateRenderer {
    fn render(&self, certificate: &Certificate) -> Result<RenderedCertificate, RenderError> {
        let svg = Self::svg(certificate).map_err(|e| RenderError::Failed(e.to_string()))?;

        Ok(RenderedCertificate {
            content_type: "image/svg+xml",
            file_name: format!("{}.svg", certificate.file_stem()),
            bytes: svg.into_bytes(),
        })
    }
}

/// Escapes the five XML special characters.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Greedy word wrap. A single word longer than `width` gets its own line.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

//! HTML to PDF rendering through headless Chromium.

use crate::ExportError;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};

/// Fixed page setup: A4, landscape, backgrounds printed.
pub fn page_setup() -> PrintToPdfOptions {
    PrintToPdfOptions {
        landscape: Some(true),
        print_background: Some(true),
        paper_width: Some(8.27),
        paper_height: Some(11.69),
        ..Default::default()
    }
}

/// Renders an HTML document into output bytes.
pub trait RenderEngine {
    fn render(&mut self, html: &str) -> Result<Vec<u8>, ExportError>;
}

/// [`RenderEngine`] backed by a headless Chromium instance.
///
/// The browser process is owned by this struct and shuts down when it is
/// dropped, so holding one engine per puzzle releases it on every exit path.
pub struct ChromiumEngine {
    browser: Browser,
}

impl ChromiumEngine {
    /// Launch a fresh headless browser.
    pub fn new() -> Result<Self, ExportError> {
        let options = LaunchOptions::default_builder()
            .build()
            .map_err(|err| ExportError::Engine(anyhow::anyhow!(err)))?;
        let browser = Browser::new(options)?;
        Ok(Self { browser })
    }
}

impl RenderEngine for ChromiumEngine {
    fn render(&mut self, html: &str) -> Result<Vec<u8>, ExportError> {
        let url = format!("data:text/html;charset=utf-8,{}", percent_encode(html));
        let tab = self.browser.new_tab()?;
        let pdf = tab
            .navigate_to(&url)?
            .wait_until_navigated()?
            .print_to_pdf(Some(page_setup()))?;
        Ok(pdf)
    }
}

/// Percent-encode a string for embedding in a `data:` URL.
fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

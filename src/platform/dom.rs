//! Browser page backed by `web-sys`.

use anyhow::{anyhow, Result};
use web_sys::{window, Document, Window};

use crate::welcome::{Page, ROOT_CONTAINER_ID};

/// The current document, as seen by the welcome renderer.
pub struct DomPage {
    window: Window,
    document: Document,
}

impl DomPage {
    /// Grab `window` and `document`; fails outside a browser main thread.
    pub fn current() -> Result<Self> {
        let window = window().ok_or_else(|| anyhow!("no window"))?;
        let document = window.document().ok_or_else(|| anyhow!("no document"))?;
        Ok(Self { window, document })
    }

    /// `location.origin`, used as the base URL for the whoami client.
    pub fn origin(&self) -> Result<String> {
        self.window
            .location()
            .origin()
            .map_err(|e| anyhow!("location.origin unavailable: {e:?}"))
    }
}

impl Page for DomPage {
    fn query_string(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    fn replace_root_html(&self, html: &str) -> Result<()> {
        let root = self
            .document
            .get_element_by_id(ROOT_CONTAINER_ID)
            .ok_or_else(|| anyhow!("element #{ROOT_CONTAINER_ID} not found"))?;
        root.set_inner_html(html);
        Ok(())
    }
}

//! Welcome renderer: tokens in the URL → whoami → banner in `#body`.
//!
//! The flow is platform-neutral. The browser binary supplies a
//! `web-sys` backed [`Page`]; tests supply an in-memory one.

use anyhow::Result;

use crate::query;
use crate::render::welcome_html;
use crate::types::Outcome;
use crate::whoami::WhoAmIClient;

/// Id of the element whose contents the banner replaces.
pub const ROOT_CONTAINER_ID: &str = "body";

/// The two things the renderer needs from the hosting page.
pub trait Page {
    /// Query part of the current URL (`location.search`), `?` included or not.
    fn query_string(&self) -> String;

    /// Replace the inner HTML of the root container.
    fn replace_root_html(&self, html: &str) -> Result<()>;
}

/// Run the renderer once.
///
/// Transport and decoding failures are logged and returned; the page is
/// never touched on any error path.
pub async fn run<P, C>(page: &P, client: &C) -> Result<Outcome>
where
    P: Page + ?Sized,
    C: WhoAmIClient + ?Sized,
{
    let Some(tokens) = query::tokens(&page.query_string()) else {
        log::debug!("[welcome] no tokens in URL, nothing to do");
        return Ok(Outcome::NoTokens);
    };

    let user = match client.whoami(&tokens).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("[welcome] whoami failed: {e:#}");
            return Err(e);
        }
    };

    if let Some(error) = user.error_message() {
        log::error!("[welcome] whoami rejected: {error}");
        return Ok(Outcome::Rejected {
            error: error.to_string(),
        });
    }

    if let Err(e) = page.replace_root_html(&welcome_html(&user)) {
        log::error!("[welcome] render failed: {e:#}");
        return Err(e);
    }
    log::info!("[welcome] rendered banner");

    Ok(Outcome::Rendered)
}

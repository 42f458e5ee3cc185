//! Opening tool links in the system browser

use log::info;

use crate::domain::{LinkKind, Tool};
use crate::error::{HubError, Result};

/// Something that can open a URL
pub trait LinkOpener {
    fn open_url(&self, url: &str) -> Result<()>;
}

/// Opens URLs with the platform's default handler
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open_url(&self, url: &str) -> Result<()> {
        open::that(url).map_err(|e| HubError::Browser(format!("Failed to open {}: {}", url, e)))
    }
}

/// Open one of a tool's links, returning the URL that was opened
pub fn open_link<'a>(opener: &dyn LinkOpener, tool: &'a Tool, kind: LinkKind) -> Result<&'a str> {
    let url = tool
        .link(kind)
        .ok_or_else(|| HubError::Browser(format!("{} has no {} link", tool.name, kind)))?;
    opener.open_url(url)?;
    info!("Opened {} link for {}: {}", kind, tool.name, url);
    Ok(url)
}

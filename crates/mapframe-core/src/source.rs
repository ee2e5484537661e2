//! The resolution context: everything the caller knows about the map to
//! embed, and the entry point that turns it into an iframe-ready URL.

use tracing::debug;

use crate::strategy::{EmbedUrl, Resolution, Strategy};

/// Context for one resolution call.
///
/// Built from the props a map component receives: a pasted URL (either the
/// service's dedicated embed URL or a plain navigation URL), a street
/// address, an optional API key, and an optional zoom override. Every
/// field is optional; [`resolve`](MapSource::resolve) decides what can be
/// made of whatever is present.
///
/// Empty strings count as missing. A blank text field behaves exactly
/// like an unset prop and can never produce a URL on its own.
///
/// # Examples
///
/// ```
/// use mapframe_core::MapSource;
///
/// let url = MapSource::new()
///     .with_url("https://www.google.com/maps/place/MASP/@-23.5614,-46.6559,17.5z")
///     .embed_url()
///     .expect("navigation url carries coordinates");
/// assert!(url.as_str().contains("-23.5614,-46.6559"));
/// assert!(url.as_str().contains("output=embed"));
///
/// assert!(MapSource::new().embed_url().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MapSource {
    raw_url: Option<String>,
    address: Option<String>,
    api_key: Option<String>,
    zoom: Option<u32>,
}

impl MapSource {
    /// Create an empty context. Resolving it yields `None` until a URL or
    /// an address is supplied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the map URL: either a ready-made embed URL or a navigation URL
    /// copied from the service's address bar.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.raw_url = Some(url.into());
        self
    }

    /// Set the address used as the fallback place query.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the API key that unlocks the keyed precise-view endpoint.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the zoom level. Takes precedence over any zoom extracted
    /// from the URL.
    pub fn with_zoom(mut self, zoom: u32) -> Self {
        self.zoom = Some(zoom);
        self
    }

    /// The raw URL, if set to a non-empty value.
    pub fn raw_url(&self) -> Option<&str> {
        self.raw_url.as_deref().filter(|s| !s.is_empty())
    }

    /// The address, if set to a non-empty value.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref().filter(|s| !s.is_empty())
    }

    /// The API key, if set to a non-empty value.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|s| !s.is_empty())
    }

    /// The explicit zoom override, if any.
    pub fn zoom(&self) -> Option<u32> {
        self.zoom
    }

    /// Walk the strategy chain and return the first result, with the
    /// winning strategy attached.
    ///
    /// `None` means insufficient data (no usable URL, no usable address).
    /// That is an expected configuration state, not an error; the caller
    /// is responsible for rendering guidance instead of a frame.
    pub fn resolve(&self) -> Option<Resolution> {
        let resolved = Strategy::PRIORITY.iter().find_map(|&strategy| {
            strategy
                .apply(self)
                .map(|url| Resolution { strategy, url })
        });
        match &resolved {
            Some(resolution) => debug!(
                strategy = resolution.strategy.describe(),
                url = %resolution.url,
                "resolved embed source"
            ),
            None => debug!("no usable map source"),
        }
        resolved
    }

    /// Like [`resolve`](MapSource::resolve), but returns just the URL.
    pub fn embed_url(&self) -> Option<EmbedUrl> {
        self.resolve().map(|resolution| resolution.url)
    }
}

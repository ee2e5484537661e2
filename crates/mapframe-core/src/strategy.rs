//! The priority-ordered synthesis chain that turns a [`MapSource`] into an
//! embeddable URL.
//!
//! Strategies are evaluated in [`Strategy::PRIORITY`] order and the first
//! one to produce a URL wins; later entries never run. The order prefers
//! the most explicit, highest-fidelity source first:
//!
//! 1. [`Strategy::PassThrough`]: the raw URL already uses the dedicated
//!    embed path and is returned untouched.
//! 2. [`Strategy::CoordinateView`]: the raw URL is a navigation URL with a
//!    view marker; a fresh embed URL is synthesized around the extracted
//!    coordinates (keyed precise-view endpoint when an API key is
//!    available, plain query endpoint otherwise).
//! 3. [`Strategy::AddressQuery`]: a place query built from the address
//!    text. Needs neither coordinates nor a key.
//! 4. [`Strategy::ForcedEmbed`]: last resort for unrecognized raw URLs;
//!    the embed flag is appended so the service at least renders
//!    frame-safe.
//!
//! Nothing in the chain panics or returns an error: a strategy that does
//! not apply yields `None` and evaluation moves on.

use std::fmt;

use tracing::trace;

use crate::source::MapSource;
use crate::view::MapView;

/// Fallback zoom when neither an override nor an extracted zoom is available.
pub const DEFAULT_ZOOM: u32 = 15;

/// Dedicated embed-path convention. URLs containing it are already
/// iframe-safe and must not be rewritten.
const EMBED_PATH_MARKER: &str = "google.com/maps/embed";

/// Broader "this is a map URL" convention used by the navigation UI.
const MAPS_URL_MARKER: &str = "google.com/maps";

/// Keyed precise-view embed endpoint.
const VIEW_ENDPOINT: &str = "https://www.google.com/maps/embed/v1/view";

/// Keyless query embed endpoint.
const QUERY_ENDPOINT: &str = "https://maps.google.com/maps";

/// Query parameter that switches the service into frame-safe embed mode.
const EMBED_FLAG: &str = "output=embed";

/// A URL ready to be used as an iframe `src`.
///
/// Produced only by the synthesis chain, so holding one means the
/// construction rules were satisfied. The inner string is deliberately
/// kept byte-exact: pass-through URLs are not reserialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmbedUrl(String);

impl EmbedUrl {
    pub(crate) fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EmbedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmbedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for EmbedUrl {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<EmbedUrl> for &str {
    fn eq(&self, other: &EmbedUrl) -> bool {
        *self == other.0
    }
}

impl From<EmbedUrl> for String {
    fn from(url: EmbedUrl) -> Self {
        url.0
    }
}

/// Outcome of a successful resolution: the winning strategy and its URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Which chain entry produced the URL.
    pub strategy: Strategy,
    /// The iframe-ready URL.
    pub url: EmbedUrl,
}

/// One entry of the synthesis chain, highest fidelity first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The raw URL already uses the dedicated embed path; pass it through
    /// byte-for-byte.
    PassThrough,
    /// Synthesize from the coordinates found in a navigation URL.
    CoordinateView,
    /// Build a place query from the address text.
    AddressQuery,
    /// Force the embed flag onto an otherwise unrecognized raw URL.
    ForcedEmbed,
}

impl Strategy {
    /// Evaluation order of the chain. First match wins.
    pub const PRIORITY: [Strategy; 4] = [
        Strategy::PassThrough,
        Strategy::CoordinateView,
        Strategy::AddressQuery,
        Strategy::ForcedEmbed,
    ];

    /// Short label for logs and demo output.
    pub fn describe(self) -> &'static str {
        match self {
            Self::PassThrough => "already embeddable",
            Self::CoordinateView => "coordinates from navigation url",
            Self::AddressQuery => "address query",
            Self::ForcedEmbed => "embed flag forced",
        }
    }

    /// Try to synthesize an embeddable URL from `source` with this
    /// strategy alone, ignoring the rest of the chain. Returns `None`
    /// when the strategy does not apply to the given context.
    pub fn apply(self, source: &MapSource) -> Option<EmbedUrl> {
        match self {
            Self::PassThrough => pass_through(source),
            Self::CoordinateView => coordinate_view(source),
            Self::AddressQuery => address_query(source),
            Self::ForcedEmbed => forced_embed(source),
        }
    }
}

/// Zoom priority rule: the explicit override wins, then the zoom extracted
/// from the URL, then [`DEFAULT_ZOOM`].
pub fn effective_zoom(requested: Option<u32>, extracted: Option<u32>) -> u32 {
    requested.or(extracted).unwrap_or(DEFAULT_ZOOM)
}

fn pass_through(source: &MapSource) -> Option<EmbedUrl> {
    let raw = source.raw_url()?;
    raw.contains(EMBED_PATH_MARKER).then(|| EmbedUrl::new(raw))
}

fn coordinate_view(source: &MapSource) -> Option<EmbedUrl> {
    let raw = source.raw_url()?;
    if !raw.contains(MAPS_URL_MARKER) {
        return None;
    }
    let view = MapView::extract(raw)?;
    let zoom = effective_zoom(source.zoom(), Some(view.zoom));
    let url = match source.api_key() {
        Some(key) => {
            trace!(zoom, "api key present; using the precise-view endpoint");
            format!(
                "{VIEW_ENDPOINT}?key={key}&center={}&zoom={zoom}",
                view.center_query()
            )
        }
        None => {
            trace!(zoom, "no api key; using the reduced-fidelity query endpoint");
            format!(
                "{QUERY_ENDPOINT}?q={}&z={zoom}&{EMBED_FLAG}",
                view.center_query()
            )
        }
    };
    Some(EmbedUrl::new(url))
}

fn address_query(source: &MapSource) -> Option<EmbedUrl> {
    let address = source.address()?;
    Some(EmbedUrl::new(format!(
        "{QUERY_ENDPOINT}?q={}&{EMBED_FLAG}",
        urlencoding::encode(address)
    )))
}

fn forced_embed(source: &MapSource) -> Option<EmbedUrl> {
    let raw = source.raw_url()?;
    if raw.contains(EMBED_FLAG) {
        return Some(EmbedUrl::new(raw));
    }
    Some(EmbedUrl::new(append_embed_flag(raw)))
}

/// Append the embed flag to `raw` as a query parameter.
///
/// Structural parsing is preferred; when the string is not a parseable
/// URL the flag is concatenated textually instead, so a malformed input
/// still yields a best-effort result rather than an error.
fn append_embed_flag(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut parsed) => {
            parsed.query_pairs_mut().append_pair("output", "embed");
            parsed.to_string()
        }
        Err(error) => {
            trace!(url = raw, %error, "raw url did not parse; appending embed flag textually");
            let separator = if raw.contains('?') { '&' } else { '?' };
            format!("{raw}{separator}{EMBED_FLAG}")
        }
    }
}

//! Core resolution engine for the **mapframe** embed helper.
//!
//! `mapframe-core` decides what to load into a map iframe. Users paste
//! whatever their maps service gave them: sometimes a purpose-built embed
//! URL, more often the navigation URL from the browser's address bar, and
//! sometimes nothing but a street address. This crate normalizes all of
//! those into a URL that renders as an interactive map inside an iframe
//! instead of bouncing to the full site.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`MapSource`] | Builder-style context: URL, address, API key, zoom override |
//! | [`Resolution`] | The winning [`Strategy`] plus the URL it produced |
//! | [`Strategy`] | One rung of the priority chain, applied in fixed order |
//! | [`EmbedUrl`] | A URL judged safe to load inside an iframe |
//! | [`MapView`] | Coordinates and zoom lifted from a navigation URL |
//! | [`AspectRatio`] | Closed set of frame shapes with CSS padding percentages |
//!
//! # Resolution chain
//!
//! [`MapSource::resolve`] tries each strategy in order and stops at the
//! first hit:
//!
//! 1. **Pass through** -- a URL already pointing at the embed endpoint is
//!    used verbatim.
//! 2. **Coordinate view** -- a navigation URL carrying an `@lat,lng,zoomz`
//!    marker becomes a precise view URL (with an API key) or a coordinate
//!    query (without one).
//! 3. **Address query** -- a street address becomes a place-search URL.
//! 4. **Forced embed** -- any remaining URL gets the embed flag appended.
//!
//! An empty context resolves to `None`; that is the caller's cue to render
//! setup guidance instead of a frame.
//!
//! # Quick example
//!
//! ```
//! use mapframe_core::{AspectRatio, MapSource};
//!
//! let url = MapSource::new()
//!     .with_address("1600 Amphitheatre Parkway")
//!     .embed_url()
//!     .expect("an address always resolves");
//! assert_eq!(
//!     url.as_str(),
//!     "https://maps.google.com/maps?q=1600%20Amphitheatre%20Parkway&output=embed"
//! );
//!
//! // Pair the URL with a padding percentage for a responsive container.
//! assert_eq!(AspectRatio::Widescreen.padding_percent(), "56.25%");
//! ```
//!
//! # Feature flags
//!
//! * `serde` -- derives `Serialize`/`Deserialize` (camelCase) for the
//!   configuration-shaped types: [`MapSource`], [`MapView`], and
//!   [`AspectRatio`].

pub mod aspect;
pub mod source;
pub mod strategy;
pub mod view;

pub use aspect::{AspectRatio, ParseAspectRatioError};
pub use source::MapSource;
pub use strategy::{effective_zoom, EmbedUrl, Resolution, Strategy, DEFAULT_ZOOM};
pub use view::MapView;

/// Resolve a pasted URL with no other context.
///
/// Shorthand for the common case where all you have is the link itself.
///
/// ```
/// let url = mapframe_core::embed_url_for("https://www.google.com/maps/embed?pb=!1m2");
/// assert_eq!(url.unwrap(), "https://www.google.com/maps/embed?pb=!1m2");
/// ```
pub fn embed_url_for(url: impl Into<String>) -> Option<EmbedUrl> {
    MapSource::new().with_url(url).embed_url()
}

//! **mapframe** -- turn pasted map links and addresses into iframe-ready
//! embed URLs.
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! ```toml
//! [dependencies]
//! mapframe = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`mapframe_core`] are available at the crate
//!   root ([`MapSource`], [`Resolution`], [`Strategy`], [`EmbedUrl`],
//!   [`MapView`], [`AspectRatio`], [`embed_url_for`], etc.).
//! * [`url`] is re-exported so downstream crates can inspect the produced
//!   URLs without depending on it directly.
//!
//! # Quick start
//!
//! ```
//! use mapframe::MapSource;
//!
//! let url = MapSource::new()
//!     .with_url("https://www.google.com/maps/place/MASP/@-23.5614,-46.6559,17z")
//!     .embed_url()
//!     .expect("navigation urls with coordinates always resolve");
//! assert!(url.as_str().ends_with("output=embed"));
//! ```

pub use mapframe_core::*;

// Re-export dependencies for use in examples and downstream crates
pub use url;

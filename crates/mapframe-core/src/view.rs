//! Coordinate extraction from map-service navigation URLs.
//!
//! When a user pans around the map service's normal UI, the service keeps
//! the current view state in the URL path as an `@latitude,longitude,zoomz`
//! segment (e.g. `.../@-19.8157,-43.9542,16.68z/...`). [`MapView::extract`]
//! scans an arbitrary string for that marker so the synthesizer can rebuild
//! an embeddable URL centered on the same spot.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Matches `@<lat>,<lng>,<zoom>z` anywhere in a string. Latitude and
/// longitude are signed decimals; zoom is an unsigned decimal with an
/// optional fractional part, terminated by the literal `z`.
static VIEW_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@(-?\d+(?:\.\d+)?),(-?\d+(?:\.\d+)?),(\d+(?:\.\d+)?)z")
        .expect("view marker regex should compile")
});

/// A map view decoded from a navigation URL: a center point plus zoom.
///
/// Coordinates are carried through verbatim, without geographic-bounds
/// validation. Whatever range the service put in the URL is what the
/// synthesizer interpolates back out.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MapView {
    /// Signed decimal degrees.
    pub latitude: f64,
    /// Signed decimal degrees.
    pub longitude: f64,
    /// Zoom level, rounded to the nearest integer during extraction.
    pub zoom: u32,
}

impl MapView {
    /// Scan `url` for a view marker and decode it.
    ///
    /// Returns `None` when no complete `@lat,lng,zoomz` marker is present
    /// anywhere in the string; partial markers never match and nothing is
    /// ever an error. The fractional zoom the service writes (`16.68z`) is
    /// rounded to the nearest integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use mapframe_core::MapView;
    ///
    /// let url = "https://www.google.com/maps/place/X/@-19.8157,-43.9542,16.68z/data=!3m1";
    /// let view = MapView::extract(url).unwrap();
    /// assert_eq!(view.latitude, -19.8157);
    /// assert_eq!(view.longitude, -43.9542);
    /// assert_eq!(view.zoom, 17);
    ///
    /// assert!(MapView::extract("https://example.com/no-marker").is_none());
    /// ```
    pub fn extract(url: &str) -> Option<Self> {
        let caps = VIEW_MARKER.captures(url)?;
        let latitude = caps[1].parse().ok()?;
        let longitude = caps[2].parse().ok()?;
        let zoom: f64 = caps[3].parse().ok()?;
        Some(Self {
            latitude,
            longitude,
            zoom: zoom.round() as u32,
        })
    }

    /// The `lat,lng` pair in the form the synthesizer interpolates into
    /// `center=` and `q=` query parameters.
    pub fn center_query(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for MapView {
    /// Renders the view back in its URL-marker form, e.g. `@-19.81,-43.95,16z`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{},{},{}z", self.latitude, self.longitude, self.zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn extracts_marker_from_navigation_url() {
        let url = "https://www.google.com/maps/place/Pra%C3%A7a+Sete/@-19.8157,-43.9542,16.68z/data=!3m1!4b1";
        let view = MapView::extract(url).unwrap();
        assert_eq!(view.latitude, -19.8157);
        assert_eq!(view.longitude, -43.9542);
        assert_eq!(view.zoom, 17);
    }

    #[test]
    fn integer_zoom_is_kept_as_is() {
        let view = MapView::extract("https://maps/@-23.5505,-46.6333,15z").unwrap();
        assert_eq!(view.zoom, 15);
    }

    #[test]
    fn fractional_zoom_rounds_to_nearest() {
        assert_eq!(MapView::extract("@0,0,16.4z").unwrap().zoom, 16);
        assert_eq!(MapView::extract("@0,0,16.5z").unwrap().zoom, 17);
        assert_eq!(MapView::extract("@0,0,16.68z").unwrap().zoom, 17);
    }

    #[test]
    fn positive_coordinates_match() {
        let view = MapView::extract("/@48.8584,2.2945,17.25z").unwrap();
        assert_eq!(view.latitude, 48.8584);
        assert_eq!(view.longitude, 2.2945);
        assert_eq!(view.zoom, 17);
    }

    #[test]
    fn marker_is_found_anywhere_in_the_string() {
        let view = MapView::extract("prefix@1.5,-2.25,3zsuffix").unwrap();
        assert_eq!(view.latitude, 1.5);
        assert_eq!(view.longitude, -2.25);
        assert_eq!(view.zoom, 3);
    }

    #[test]
    fn no_marker_returns_none() {
        assert!(MapView::extract("").is_none());
        assert!(MapView::extract("https://example.com/maps").is_none());
        assert!(MapView::extract("q=-23.5505,-46.6333&z=15").is_none());
    }

    #[test]
    fn partial_markers_never_match() {
        // Missing zoom term or terminator.
        assert!(MapView::extract("@-19.81,-43.95z").is_none());
        assert!(MapView::extract("@-19.81,-43.95,16.68").is_none());
        // Missing longitude.
        assert!(MapView::extract("@-19.81,,16z").is_none());
        // Zoom may not be signed.
        assert!(MapView::extract("@-19.81,-43.95,-16z").is_none());
    }

    #[test]
    fn first_marker_wins_when_several_are_present() {
        let view = MapView::extract("@1,2,3z then later @4,5,6z").unwrap();
        assert_eq!((view.latitude, view.longitude, view.zoom), (1.0, 2.0, 3));
    }

    #[test]
    fn center_query_joins_coordinates() {
        let view = MapView {
            latitude: -23.5505,
            longitude: -46.6333,
            zoom: 15,
        };
        assert_eq!(view.center_query(), "-23.5505,-46.6333");
    }

    #[test]
    fn display_renders_marker_form() {
        let view = MapView {
            latitude: -19.81,
            longitude: -43.95,
            zoom: 17,
        };
        assert_eq!(view.to_string(), "@-19.81,-43.95,17z");
    }

    proptest! {
        #[test]
        fn any_embedded_marker_roundtrips(
            lat in -90.0f64..90.0,
            lng in -180.0f64..180.0,
            zoom in 0.0f64..22.0,
        ) {
            let url = format!(
                "https://www.google.com/maps/place/Somewhere/@{lat:.4},{lng:.4},{zoom:.2}z/data=!3m1"
            );
            let view = MapView::extract(&url).unwrap();
            prop_assert_eq!(view.latitude, format!("{lat:.4}").parse::<f64>().unwrap());
            prop_assert_eq!(view.longitude, format!("{lng:.4}").parse::<f64>().unwrap());
            prop_assert_eq!(
                view.zoom,
                format!("{zoom:.2}").parse::<f64>().unwrap().round() as u32
            );
        }

        #[test]
        fn strings_without_an_at_sign_never_match(s in "[A-Za-z0-9 ./:_?=&,-]*") {
            // The alphabet excludes '@', which every marker requires.
            prop_assert!(MapView::extract(&s).is_none());
        }
    }
}

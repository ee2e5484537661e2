//! # Embed URL Example
//!
//! Resolves a handful of map sources and prints which strategy produced
//! each embed URL:
//! - A ready-made embed URL passing through untouched
//! - A navigation URL resolved with and without an API key
//! - A bare address falling back to a place query
//! - An unrecognized URL getting the embed flag forced onto it
//!
//! Run with: `cargo run --example embed_url`

use mapframe::MapSource;

fn main() {
    let sources = [
        (
            "pasted embed url",
            MapSource::new().with_url("https://www.google.com/maps/embed?pb=!1m18!1m12"),
        ),
        (
            "navigation url, no key",
            MapSource::new()
                .with_url("https://www.google.com/maps/place/MASP/@-23.5614,-46.6559,17z"),
        ),
        (
            "navigation url, keyed",
            MapSource::new()
                .with_url("https://www.google.com/maps/place/MASP/@-23.5614,-46.6559,17z")
                .with_api_key("demo-key"),
        ),
        (
            "address only",
            MapSource::new().with_address("Av. Paulista, 1578 - Sao Paulo"),
        ),
        (
            "unrecognized url",
            MapSource::new().with_url("https://maps.example.com/view?layer=transit"),
        ),
        ("nothing at all", MapSource::new()),
    ];

    for (label, source) in sources {
        match source.resolve() {
            Some(resolution) => {
                println!("{label}:");
                println!("  strategy: {}", resolution.strategy.describe());
                println!("  url:      {}", resolution.url);
            }
            None => {
                println!("{label}:");
                println!("  no usable source; show setup guidance instead of a frame");
            }
        }
        println!();
    }
}

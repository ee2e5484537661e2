//! # Responsive Frame Example
//!
//! Combines both halves of the crate: resolves an embed URL, then wraps
//! it in the padded-container markup that keeps an iframe at a fixed
//! aspect ratio at any width.
//!
//! Run with: `cargo run --example responsive_frame`

use mapframe::{AspectRatio, MapSource};

fn main() {
    for ratio in AspectRatio::ALL {
        let (width, height) = ratio.dimensions();
        println!(
            "{:>5}  ({width} x {height})  padding-bottom: {}",
            ratio.as_str(),
            ratio.padding_percent()
        );
    }
    println!();

    let Some(url) = MapSource::new()
        .with_url("https://www.google.com/maps/place/Obelisco/@-34.6037,-58.3816,16z")
        .embed_url()
    else {
        eprintln!("no usable map source");
        return;
    };

    // The padding-bottom trick: a zero-height container whose bottom
    // padding is a percentage of its own width, with the iframe stretched
    // over it absolutely.
    let ratio = AspectRatio::default();
    println!(
        r#"<div style="position: relative; height: 0; padding-bottom: {padding};">
  <iframe
    src="{url}"
    style="position: absolute; inset: 0; width: 100%; height: 100%; border: 0;"
    loading="lazy"
    referrerpolicy="no-referrer-when-downgrade"
    allowfullscreen></iframe>
</div>"#,
        padding = ratio.padding_percent(),
    );
}

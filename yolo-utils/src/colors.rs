use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::Color;

/// Fixed shuffle seed so the class -> color mapping is stable across runs.
const SHUFFLE_SEED: u64 = 10101;

/// Generates one display color per class: hues evenly spaced around the
/// circle at full saturation and value, then shuffled so adjacent class ids
/// get visually decorrelated colors.
///
/// The shuffle uses a generator local to this call seeded with a fixed value,
/// so the result is reproducible for a given class count and no other
/// randomness in the process is affected.
pub fn generate_colors(class_names: &[String]) -> Vec<Color> {
    let count = class_names.len();
    let mut colors: Vec<Color> = (0..count)
        .map(|i| hsv_to_rgb(i as f32 / count as f32, 1.0, 1.0))
        .collect();

    let mut rng = StdRng::seed_from_u64(SHUFFLE_SEED);
    colors.shuffle(&mut rng);
    colors
}

/// Converts a hue in [0, 1) at the given saturation and value to RGB, each
/// channel scaled to [0, 255] and truncated.
fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as i32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Color((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

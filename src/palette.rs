//! Per-lane colors
//!
//! Hues are spread evenly around the color wheel from a random base, with
//! alternating saturation and cycling lightness so neighbors stay apart even
//! when hues are close. The finished list is shuffled so lane position says
//! nothing about hue order.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A color in HSL space (hue in degrees, saturation/lightness in percent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Convert to linear RGBA floats in 0..=1
    pub fn to_rgba(self) -> [f32; 4] {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        [r + m, g + m, b + m, 1.0]
    }
}

/// CSS notation, e.g. `hsl(120, 70%, 50%)`
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// Generate `count` visually distinct colors in shuffled order
pub fn distinct_colors<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Hsl> {
    if count == 0 {
        return Vec::new();
    }

    let base_hue = rng.random_range(0..360u32) as f32;
    let step = 360.0 / count as f32;

    let mut colors: Vec<Hsl> = (0..count)
        .map(|i| {
            let hue = (base_hue + step * i as f32) % 360.0;
            let saturation = 70.0 + (i % 2) as f32 * 20.0; // 70% or 90%
            let lightness = 50.0 + (i % 3) as f32 * 10.0; // 50%, 60%, 70%
            Hsl::new(hue, saturation, lightness)
        })
        .collect();

    colors.shuffle(rng);
    colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn approx(a: [f32; 4], b: [f32; 4]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn test_primary_hues() {
        assert!(approx(Hsl::new(0.0, 100.0, 50.0).to_rgba(), [1.0, 0.0, 0.0, 1.0]));
        assert!(approx(Hsl::new(120.0, 100.0, 50.0).to_rgba(), [0.0, 1.0, 0.0, 1.0]));
        assert!(approx(Hsl::new(240.0, 100.0, 50.0).to_rgba(), [0.0, 0.0, 1.0, 1.0]));
        assert!(approx(Hsl::new(360.0, 100.0, 50.0).to_rgba(), [1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn test_gray_when_unsaturated() {
        assert!(approx(Hsl::new(200.0, 0.0, 20.0).to_rgba(), [0.2, 0.2, 0.2, 1.0]));
    }

    #[test]
    fn test_css_format() {
        assert_eq!(Hsl::new(90.0, 70.0, 60.0).to_string(), "hsl(90, 70%, 60%)");
    }

    #[test]
    fn test_distinct_colors_count_and_bands() {
        let mut rng = Pcg32::seed_from_u64(7);
        let colors = distinct_colors(6, &mut rng);
        assert_eq!(colors.len(), 6);

        // Hues are evenly spaced 60 degrees apart once sorted
        let mut hues: Vec<f32> = colors.iter().map(|c| c.hue).collect();
        hues.sort_by(|a, b| a.partial_cmp(b).unwrap());
        for pair in hues.windows(2) {
            assert!((pair[1] - pair[0] - 60.0).abs() < 1e-3);
        }

        for c in &colors {
            assert!(c.saturation == 70.0 || c.saturation == 90.0);
            assert!([50.0, 60.0, 70.0].contains(&c.lightness));
            assert!((0.0..360.0).contains(&c.hue));
        }
    }

    #[test]
    fn test_distinct_colors_seeded() {
        let a = distinct_colors(5, &mut Pcg32::seed_from_u64(42));
        let b = distinct_colors(5, &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_palette() {
        assert!(distinct_colors(0, &mut Pcg32::seed_from_u64(1)).is_empty());
    }
}

use fid_line_finder::pattern::{Pattern, PatternCatalog, Wire};
use fid_line_finder::Dot;

/// Dots of one wire pattern imaged along `angle_deg` from `origin` (pixels).
pub fn pattern_dots(
    origin: [f32; 2],
    angle_deg: f32,
    distances_mm: &[f64],
    spacing_mm_per_px: f64,
    intensity: f32,
) -> Vec<Dot> {
    let (s, c) = angle_deg.to_radians().sin_cos();
    distances_mm
        .iter()
        .map(|&d| {
            let t = (d / spacing_mm_per_px) as f32;
            Dot::new(origin[0] + t * c, origin[1] + t * s, intensity)
        })
        .collect()
}

/// Vertical column of distractor dots, `step` pixels apart.
pub fn distractor_column(x: f32, y0: f32, step: f32, count: usize) -> Vec<Dot> {
    (0..count)
        .map(|k| Dot::new(x, y0 + step * k as f32, 1.0))
        .collect()
}

/// Deterministic perpendicular jitter in `[-amplitude, amplitude]`.
pub fn jitter(dots: &mut [Dot], amplitude: f32, seed: u32) {
    let mut state = seed.wrapping_mul(747_796_405).wrapping_add(2_891_336_453);
    for dot in dots {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let unit = (state >> 8) as f32 / (1u32 << 24) as f32;
        dot.y += (2.0 * unit - 1.0) * amplitude;
    }
}

pub fn chain_catalog(distances_mm: &[f64], tolerance_mm: f64) -> PatternCatalog {
    let wires = distances_mm
        .iter()
        .map(|&d| Wire::new(d, tolerance_mm))
        .collect();
    PatternCatalog::new(vec![Pattern::chain("chain", wires)]).expect("valid catalog")
}

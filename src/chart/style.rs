use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Fonts and strokes
// ---------------------------------------------------------------------------

// Sized for a 3600×3000 px canvas (12×10 in at 300 DPI).
pub const FONT: &str = "sans-serif";
pub const TITLE_SIZE: i32 = 64;
pub const LABEL_SIZE: i32 = 52;
pub const TICK_SIZE: i32 = 40;

pub const SERIES_STROKE: u32 = 5;
pub const BOUNDARY_STROKE: u32 = 3;

/// Neutral grey for the hardware-boundary reference lines.
pub const BOUNDARY_COLOR: RGBColor = RGBColor(96, 96, 96);

// ---------------------------------------------------------------------------
// Series palette
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn series_palette(n: usize) -> Vec<RGBColor> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

//! Green-pixel heuristic behind the tree-planting verification page.
//!
//! This is a plain channel comparison, not a vision model. The counts are
//! real; the derived "accuracy" figure is a cosmetic formula for the results
//! screen and must not be read as a measured statistic.

use image::{ImageError, Rgb, RgbImage};

/// Minimum gain in green pixels before a new tree is declared.
pub const DETECTION_THRESHOLD: i64 = 1000;

/// Whether a pixel reads as vegetation: green dominates both other channels
/// by a margin, and is bright enough to rule out near-black noise.
pub fn is_green(pixel: Rgb<u8>) -> bool {
    let [r, g, b] = pixel.0;
    let (r, g, b) = (u16::from(r), u16::from(g), u16::from(b));
    g > r && g > b && g > 40 && g - r > 10 && g - b > 10
}

/// Counts vegetation pixels. Never fails for a decoded image; an image with
/// no vegetation simply counts zero.
pub fn count_green_pixels(image: &RgbImage) -> u64 {
    image.pixels().filter(|&&pixel| is_green(pixel)).count() as u64
}

/// Decodes an uploaded or captured frame into an RGB bitmap.
pub fn decode(bytes: &[u8]) -> Result<RgbImage, ImageError> {
    Ok(image::load_from_memory(bytes)?.to_rgb8())
}

/// Before/after comparison results for the verification screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub before_count: u64,
    pub after_count: u64,
    /// Gain in green pixels; negative when vegetation was lost.
    pub difference: i64,
    /// Relative gain over the before image, in percent. Pinned to 100 when
    /// the before image had no vegetation at all.
    pub increase_percentage: f64,
    /// Share of the before image that reads as vegetation, in percent.
    pub before_percentage: f64,
    /// Share of the after image that reads as vegetation, in percent.
    pub after_percentage: f64,
    /// Whether the gain clears [`DETECTION_THRESHOLD`].
    pub tree_detected: bool,
    /// Cosmetic confidence figure for the results screen. Presentation only.
    pub accuracy: f64,
}

/// Compares two frames of the same scene and builds the report.
pub fn analyze(before: &RgbImage, after: &RgbImage) -> Report {
    let before_count = count_green_pixels(before);
    let after_count = count_green_pixels(after);
    let difference = after_count as i64 - before_count as i64;
    let tree_detected = difference > DETECTION_THRESHOLD;

    let increase_percentage = if before_count > 0 {
        difference as f64 / before_count as f64 * 100.0
    } else {
        100.0
    };

    log::debug!("greenery gain {difference} ({before_count} -> {after_count}), detected: {tree_detected}");

    Report {
        before_count,
        after_count,
        difference,
        increase_percentage,
        before_percentage: percentage_of(before_count, before),
        after_percentage: percentage_of(after_count, after),
        tree_detected,
        accuracy: accuracy(tree_detected, difference),
    }
}

fn percentage_of(count: u64, image: &RgbImage) -> f64 {
    let total = u64::from(image.width()) * u64::from(image.height());
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// The results screen's confidence bands, reproduced as shipped.
fn accuracy(tree_detected: bool, difference: i64) -> f64 {
    let difference = difference as f64;
    if tree_detected {
        let raw = if difference > 5000.0 {
            95.0 + difference / 10000.0
        } else if difference > 2000.0 {
            85.0 + difference / 1000.0
        } else {
            70.0 + difference / 500.0
        };
        raw.min(99.9)
    } else {
        (difference / 1000.0 * 50.0).clamp(0.0, 50.0)
    }
}

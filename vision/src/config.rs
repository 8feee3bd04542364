use opencv::core::Scalar;

/// Inclusive HSV range on the OpenCV 8-bit scale (hue 0–180,
/// saturation/value 0–255).
#[derive(Debug, Clone, Copy)]
pub struct HsvBand {
    pub lower: Scalar,
    pub upper: Scalar,
}

impl HsvBand {
    /// Build a band from `(hue, saturation, value)` bounds.
    pub fn new(lower: (f64, f64, f64), upper: (f64, f64, f64)) -> Self {
        Self {
            lower: Scalar::new(lower.0, lower.1, lower.2, 0.0),
            upper: Scalar::new(upper.0, upper.1, upper.2, 0.0),
        }
    }
}

/// Tunable parameters for badge detection.
///
/// Red wraps around the 0/180 hue boundary, so the mask is the union of two
/// disjoint bands; a single contiguous range cannot capture it.
#[derive(Debug, Clone, Copy)]
pub struct DetectorConfig {
    /// Red band at the low end of the hue axis.
    pub low_red: HsvBand,
    /// Red band at the high end of the hue axis.
    pub high_red: HsvBand,
    /// Side length of the square structuring element used for the
    /// closing/opening cleanup.
    pub kernel_size: i32,
    /// Strict lower bound on contour area; contours at or below it are
    /// dropped as noise.
    pub min_area: f64,
    /// When set, only contours with circularity above
    /// `circularity_threshold` survive. Disable to accept any
    /// sufficiently large red blob.
    pub require_circular: bool,
    /// Circularity cut-off (`4π·area/perimeter²`, 1.0 for a perfect
    /// circle). Only consulted when `require_circular` is set.
    pub circularity_threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            low_red: HsvBand::new((0.0, 120.0, 120.0), (10.0, 255.0, 255.0)),
            high_red: HsvBand::new((160.0, 120.0, 120.0), (180.0, 255.0, 255.0)),
            kernel_size: 5,
            min_area: 8.0,
            require_circular: true,
            circularity_threshold: 0.7,
        }
    }
}

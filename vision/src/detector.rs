use crate::DetectResult;
use crate::config::DetectorConfig;
use crate::result::Badge;
use image::RgbaImage;
use opencv::{
    core::{self, Mat, Point, Scalar, Size},
    imgproc,
    prelude::*,
};
use std::f64::consts::PI;

/// Detection failure. Contour-level anomalies (zero perimeter, zero moment
/// area) are absorbed inside the pipeline; only capture-level problems
/// surface here.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("capture buffer is empty ({width}x{height})")]
    EmptyCapture { width: u32, height: u32 },
    #[error(transparent)]
    OpenCv(#[from] opencv::Error),
}

/// Finds red circular badges in a captured screen region.
///
/// Stateless per call: every [`detect`](Self::detect) pass derives its
/// buffers from the input image and discards them, so repeated calls on the
/// same capture produce identical results.
pub struct BadgeDetector {
    config: DetectorConfig,
}

impl BadgeDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Run one detection pass.
    ///
    /// `origin` is the screen coordinate of the capture's top-left pixel;
    /// returned badges are offset by it. The result is sorted ascending by
    /// `screen_y` (topmost badge first), ties keeping contour discovery
    /// order. An empty result means no unread badges, not a failure.
    pub fn detect(&self, image: &RgbaImage, origin: (i32, i32)) -> DetectResult<Vec<Badge>> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(DetectError::EmptyCapture { width, height });
        }

        let bgr = rgba_to_bgr(image)?;
        let hsv = bgr_to_hsv(&bgr)?;
        let mask = self.red_mask(&hsv)?;
        let contours = outer_contours(&mask)?;

        let mut badges = Vec::new();
        for contour in contours.iter() {
            if let Some(badge) = self.measure(&contour, origin)? {
                badges.push(badge);
            }
        }

        badges.sort_by_key(|badge| badge.screen_y);
        Ok(badges)
    }

    /// Union of the two red hue bands, then closing to fill gaps inside a
    /// badge and opening to drop isolated noise pixels.
    fn red_mask(&self, hsv: &Mat) -> DetectResult<Mat> {
        let mut low = Mat::default();
        core::in_range(
            hsv,
            &self.config.low_red.lower,
            &self.config.low_red.upper,
            &mut low,
        )?;
        let mut high = Mat::default();
        core::in_range(
            hsv,
            &self.config.high_red.lower,
            &self.config.high_red.upper,
            &mut high,
        )?;
        let mut mask = Mat::default();
        core::bitwise_or(&low, &high, &mut mask, &core::no_array())?;

        let kernel = imgproc::get_structuring_element(
            imgproc::MORPH_RECT,
            Size::new(self.config.kernel_size, self.config.kernel_size),
            Point::new(-1, -1),
        )?;
        let mut closed = Mat::default();
        imgproc::morphology_ex(
            &mask,
            &mut closed,
            imgproc::MORPH_CLOSE,
            &kernel,
            Point::new(-1, -1),
            1,
            core::BORDER_CONSTANT,
            Scalar::default(),
        )?;
        let mut opened = Mat::default();
        imgproc::morphology_ex(
            &closed,
            &mut opened,
            imgproc::MORPH_OPEN,
            &kernel,
            Point::new(-1, -1),
            1,
            core::BORDER_CONSTANT,
            Scalar::default(),
        )?;
        Ok(opened)
    }

    /// Apply the filter gates to one contour and compute its badge.
    ///
    /// The geometric area gate and the raw-moment gate are intentionally
    /// independent: moment area can diverge from `contour_area` for
    /// concave contours, and a contour must pass both.
    fn measure(
        &self,
        contour: &core::Vector<core::Point>,
        origin: (i32, i32),
    ) -> DetectResult<Option<Badge>> {
        let area = imgproc::contour_area(contour, false)?;
        if area <= self.config.min_area {
            return Ok(None);
        }

        let perimeter = imgproc::arc_length(contour, true)?;
        if perimeter == 0.0 {
            // Degenerate contour, expected occasionally on noisy input.
            return Ok(None);
        }

        let circularity = 4.0 * PI * area / (perimeter * perimeter);
        if self.config.require_circular && circularity <= self.config.circularity_threshold {
            return Ok(None);
        }

        let moments = imgproc::moments(contour, false)?;
        if moments.m00 == 0.0 {
            return Ok(None);
        }
        let cx = (moments.m10 / moments.m00) as i32;
        let cy = (moments.m01 / moments.m00) as i32;

        Ok(Some(Badge::new(
            origin.0 + cx,
            origin.1 + cy,
            area,
            self.config.require_circular.then_some(circularity),
        )))
    }
}

/// Copy an RGBA capture into an OpenCV `Mat` and convert it to BGR.
pub(crate) fn rgba_to_bgr(image: &RgbaImage) -> opencv::Result<Mat> {
    let (w, h) = image.dimensions();
    let mut rgba = Mat::zeros(h as i32, w as i32, core::CV_8UC4)?.to_mat()?;
    {
        let src = image.as_raw();
        let dst = rgba.data_bytes_mut()?;
        dst.copy_from_slice(src);
    }
    let mut bgr = Mat::default();
    imgproc::cvt_color(
        &rgba,
        &mut bgr,
        imgproc::COLOR_RGBA2BGR,
        0,
        core::AlgorithmHint::ALGO_HINT_DEFAULT,
    )?;
    Ok(bgr)
}

/// Convert a BGR matrix to HSV.
fn bgr_to_hsv(bgr: &Mat) -> opencv::Result<Mat> {
    let mut hsv = Mat::default();
    imgproc::cvt_color(
        bgr,
        &mut hsv,
        imgproc::COLOR_BGR2HSV,
        0,
        core::AlgorithmHint::ALGO_HINT_DEFAULT,
    )?;
    Ok(hsv)
}

/// Outer boundaries of every connected mask region; nested boundaries are
/// not traced.
fn outer_contours(mask: &Mat) -> opencv::Result<core::Vector<core::Vector<core::Point>>> {
    let mut contours = core::Vector::<core::Vector<core::Point>>::new();
    imgproc::find_contours(
        mask,
        &mut contours,
        imgproc::RETR_EXTERNAL,
        imgproc::CHAIN_APPROX_SIMPLE,
        Point::new(0, 0),
    )?;
    Ok(contours)
}

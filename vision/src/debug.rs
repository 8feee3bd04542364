use crate::DetectResult;
use crate::detector::{DetectError, rgba_to_bgr};
use crate::result::Badge;
use image::RgbaImage;
use opencv::{
    core::{self, Point, Scalar},
    imgcodecs, imgproc,
};

/// Render detection results onto the capture and write the image to disk.
///
/// Each badge gets a filled marker at its centroid plus an area/circularity
/// caption, so thresholds can be tuned against a real screenshot without
/// attaching a debugger to the watcher loop.
pub fn save_debug_visualization(
    image: &RgbaImage,
    badges: &[Badge],
    origin: (i32, i32),
    out_path: &str,
) -> DetectResult<()> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(DetectError::EmptyCapture { width, height });
    }

    let mut canvas = rgba_to_bgr(image)?;
    for badge in badges {
        let local = Point::new(badge.screen_x - origin.0, badge.screen_y - origin.1);
        imgproc::circle(
            &mut canvas,
            local,
            5,
            Scalar::new(0.0, 255.0, 0.0, 0.0),
            -1,
            imgproc::LINE_8,
            0,
        )?;

        let text = match badge.circularity {
            Some(c) => format!("area={:.0} circ={:.2}", badge.area, c),
            None => format!("area={:.0}", badge.area),
        };
        imgproc::put_text(
            &mut canvas,
            &text,
            Point::new((local.x - 20).max(0), (local.y - 10).max(0)),
            imgproc::FONT_HERSHEY_SIMPLEX,
            0.4,
            Scalar::new(255.0, 0.0, 0.0, 0.0),
            1,
            imgproc::LINE_AA,
            false,
        )?;
    }

    imgcodecs::imwrite(out_path, &canvas, &core::Vector::new())?;
    Ok(())
}

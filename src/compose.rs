use image::{Rgb, RgbImage, imageops};

use crate::{error::StripResult, layout::plan_strip, model::Orientation};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Compose `images` into one strip on an opaque white canvas.
///
/// Images are pasted in input order, anchored top/left on the cross axis,
/// with `padding` blank pixels between adjacent images only. Pasting is a
/// literal overwrite of destination pixels; inputs are already flattened to
/// RGB, so no blending takes place. The call either returns one fresh
/// composite or fails with no partial output.
#[tracing::instrument(skip(images), fields(count = images.len()))]
pub fn compose(
    images: &[RgbImage],
    orientation: Orientation,
    padding: u32,
) -> StripResult<RgbImage> {
    let sizes: Vec<(u32, u32)> = images.iter().map(|img| img.dimensions()).collect();
    let layout = plan_strip(&sizes, orientation, padding)?;

    let mut canvas = RgbImage::from_pixel(layout.width, layout.height, BACKGROUND);
    for (img, place) in images.iter().zip(&layout.placements) {
        imageops::replace(&mut canvas, img, i64::from(place.x), i64::from(place.y));
    }

    tracing::debug!(width = layout.width, height = layout.height, "composed strip");
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StripError;

    fn solid(w: u32, h: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb(rgb))
    }

    #[test]
    fn single_image_round_trips_through_white_canvas() {
        let img = solid(7, 5, [10, 20, 30]);
        let out = compose(std::slice::from_ref(&img), Orientation::Vertical, 99).unwrap();
        assert_eq!(out.dimensions(), (7, 5));
        assert_eq!(out.as_raw(), img.as_raw());
    }

    #[test]
    fn gap_pixels_stay_white() {
        let a = solid(4, 4, [1, 1, 1]);
        let b = solid(4, 4, [2, 2, 2]);
        let out = compose(&[a, b], Orientation::Horizontal, 2).unwrap();
        assert_eq!(out.dimensions(), (10, 4));
        for y in 0..4 {
            assert_eq!(out.get_pixel(4, y), &BACKGROUND);
            assert_eq!(out.get_pixel(5, y), &BACKGROUND);
        }
        assert_eq!(out.get_pixel(0, 0), &Rgb([1, 1, 1]));
        assert_eq!(out.get_pixel(6, 0), &Rgb([2, 2, 2]));
    }

    #[test]
    fn cross_axis_remainder_stays_white() {
        let tall = solid(3, 8, [9, 9, 9]);
        let short = solid(3, 2, [5, 5, 5]);
        let out = compose(&[tall, short], Orientation::Horizontal, 0).unwrap();
        assert_eq!(out.dimensions(), (6, 8));
        // Below the short image, nothing was pasted.
        for y in 2..8 {
            for x in 3..6 {
                assert_eq!(out.get_pixel(x, y), &BACKGROUND);
            }
        }
    }

    #[test]
    fn identical_inputs_give_byte_identical_output() {
        let imgs = [solid(6, 3, [200, 0, 0]), solid(2, 9, [0, 200, 0])];
        let first = compose(&imgs, Orientation::Vertical, 4).unwrap();
        let second = compose(&imgs, Orientation::Vertical, 4).unwrap();
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn empty_input_is_rejected() {
        match compose(&[], Orientation::Horizontal, 0) {
            Err(StripError::EmptyInput) => {}
            other => panic!("expected EmptyInput, got {other:?}"),
        }
    }
}

//! Bundled card compositor.
//!
//! Renders the artwork and chrome layers of a greeting card to PNG: a white
//! canvas at the upscaled card size, the artwork fitted into the top band
//! with preserved aspect, the accent bar beside the message block, and a
//! footer rule tinted from the artwork's overlay color. Text layers belong
//! to the rendering surface that displays the card.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage, imageops, imageops::FilterType};

use super::{CARD_HEIGHT, CARD_WIDTH, CaptureError, CardFace};

/// Side padding around the artwork band, in layout pixels.
const MARGIN: u32 = 20;

/// Height reserved for the artwork at the top of the card, in layout pixels.
const ART_BAND_HEIGHT: u32 = 400;

/// Compose the card background for `face` from already-fetched artwork
/// bytes, at `scale` times the layout size.
///
/// # Errors
///
/// Returns a [`CaptureError`] when the artwork bytes do not decode, a style
/// color is malformed, or PNG encoding fails.
pub fn compose_card_png(
    artwork: &[u8],
    face: &CardFace,
    scale: u32,
) -> Result<Vec<u8>, CaptureError> {
    let scale = scale.max(1);
    let width = CARD_WIDTH * scale;
    let height = CARD_HEIGHT * scale;
    let margin = MARGIN * scale;
    let band_height = ART_BAND_HEIGHT * scale;

    let accent = parse_hex_color(&face.overlay_color)?;

    let art = image::load_from_memory(artwork).map_err(CaptureError::ArtworkDecode)?;

    let (fit_width, fit_height) = fit_within(
        art.width(),
        art.height(),
        width - 2 * margin,
        band_height,
    );
    let fitted = art.resize_exact(fit_width, fit_height, FilterType::Triangle);

    let mut canvas = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));

    let art_x = i64::from((width - fit_width) / 2);
    imageops::overlay(&mut canvas, &fitted.to_rgba8(), art_x, i64::from(margin));

    // Accent bar beside where the message block renders.
    let bar = RgbaImage::from_pixel(4 * scale, 120 * scale, accent);
    imageops::overlay(
        &mut canvas,
        &bar,
        i64::from(2 * margin),
        i64::from(margin + band_height + 40 * scale),
    );

    // Footer rule.
    let rule = RgbaImage::from_pixel(width - 2 * margin, 2 * scale, accent);
    imageops::overlay(
        &mut canvas,
        &rule,
        i64::from(margin),
        i64::from(height - 60 * scale),
    );

    let mut png = Vec::new();

    canvas
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(CaptureError::Encode)?;

    Ok(png)
}

/// Scale `(width, height)` down (or up) to the largest size fitting inside
/// `(max_width, max_height)` with preserved aspect ratio.
fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (1, 1);
    }

    let by_width = u64::from(max_width) * u64::from(height) / u64::from(width);

    if by_width <= u64::from(max_height) {
        let fitted = u32::try_from(by_width).unwrap_or(max_height).max(1);
        (max_width, fitted)
    } else {
        let by_height = u64::from(max_height) * u64::from(width) / u64::from(height);
        let fitted = u32::try_from(by_height).unwrap_or(max_width).max(1);
        (fitted, max_height)
    }
}

fn parse_hex_color(hex: &str) -> Result<Rgba<u8>, CaptureError> {
    let invalid = || CaptureError::InvalidColor(hex.to_owned());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;

    if digits.len() != 6 {
        return Err(invalid());
    }

    let value = u32::from_str_radix(digits, 16).map_err(|_ignored| invalid())?;

    let red = u8::try_from((value >> 16) & 0xff).unwrap_or(u8::MAX);
    let green = u8::try_from((value >> 8) & 0xff).unwrap_or(u8::MAX);
    let blue = u8::try_from(value & 0xff).unwrap_or(u8::MAX);

    Ok(Rgba([red, green, blue, 255]))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn sample_artwork(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 120, 40, 255]));
        let mut bytes = Vec::new();

        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();

        bytes
    }

    fn face() -> CardFace {
        CardFace {
            to: "Raj".to_owned(),
            from: "Aparna".to_owned(),
            message: "Happy Diwali!".to_owned(),
            artwork_url: "https://x/img.png".to_owned(),
            text_color: "#7c2d12".to_owned(),
            overlay_color: "#ea580c".to_owned(),
        }
    }

    #[test]
    fn output_is_png_at_the_upscaled_card_size() -> TestResult {
        let png = compose_card_png(&sample_artwork(40, 30), &face(), 3)?;

        let decoded = image::load_from_memory(&png)?;

        assert_eq!(decoded.width(), CARD_WIDTH * 3);
        assert_eq!(decoded.height(), CARD_HEIGHT * 3);

        Ok(())
    }

    #[test]
    fn scale_zero_is_clamped_to_one() -> TestResult {
        let png = compose_card_png(&sample_artwork(10, 10), &face(), 0)?;

        let decoded = image::load_from_memory(&png)?;

        assert_eq!(decoded.width(), CARD_WIDTH);

        Ok(())
    }

    #[test]
    fn garbage_artwork_bytes_fail_to_decode() {
        let result = compose_card_png(b"not an image", &face(), 1);

        assert!(
            matches!(result, Err(CaptureError::ArtworkDecode(_))),
            "expected decode error, got {result:?}"
        );
    }

    #[test]
    fn malformed_overlay_color_is_rejected() {
        let mut bad = face();
        bad.overlay_color = "orange".to_owned();

        let result = compose_card_png(&sample_artwork(10, 10), &bad, 1);

        assert!(
            matches!(result, Err(CaptureError::InvalidColor(_))),
            "expected color error, got {result:?}"
        );
    }

    #[test]
    fn fit_preserves_aspect_for_wide_art() {
        // 2:1 artwork into a 760x400 band fills the width.
        assert_eq!(fit_within(100, 50, 760, 400), (760, 380));
    }

    #[test]
    fn fit_preserves_aspect_for_tall_art() {
        // 1:2 artwork into a 760x400 band fills the height.
        assert_eq!(fit_within(50, 100, 760, 400), (200, 400));
    }

    #[test]
    fn fit_handles_degenerate_sizes() {
        assert_eq!(fit_within(0, 10, 760, 400), (1, 1));
    }

    #[test]
    fn hex_colors_parse() -> TestResult {
        assert_eq!(parse_hex_color("#ea580c")?, Rgba([0xea, 0x58, 0x0c, 255]));

        assert!(matches!(
            parse_hex_color("ea580c"),
            Err(CaptureError::InvalidColor(_))
        ));
        assert!(matches!(
            parse_hex_color("#fff"),
            Err(CaptureError::InvalidColor(_))
        ));

        Ok(())
    }
}

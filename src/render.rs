// Rasterize the icon and encode it as PNG

use crate::error::IconError;
use crate::geometry::{checkmark_path, checkmark_stroke, shield_path};
use crate::style::{
    BACKGROUND, CHECK_STROKE, SHIELD_FILL, SHIELD_OUTLINE, SHIELD_OUTLINE_WIDTH,
};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use std::fs;
use std::path::Path;
use tiny_skia::{Color, FillRule, LineCap, LineJoin, Pixmap, Stroke, Transform};

/// Draw the shield and checkmark onto a fresh transparent canvas.
pub fn render_canvas(size: u32) -> Result<Pixmap, IconError> {
    let mut pixmap = Pixmap::new(size, size).ok_or(IconError::Canvas { size })?;
    pixmap.fill(Color::from_rgba8(
        BACKGROUND.r,
        BACKGROUND.g,
        BACKGROUND.b,
        BACKGROUND.a,
    ));

    let shield = shield_path(size).ok_or(IconError::Path { size })?;
    pixmap.fill_path(
        &shield,
        &SHIELD_FILL.to_paint(),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
    let outline = Stroke {
        width: SHIELD_OUTLINE_WIDTH,
        line_join: LineJoin::Miter,
        ..Stroke::default()
    };
    pixmap.stroke_path(
        &shield,
        &SHIELD_OUTLINE.to_paint(),
        &outline,
        Transform::identity(),
        None,
    );

    let check = checkmark_stroke(size);
    let check_path = checkmark_path(&check).ok_or(IconError::Path { size })?;
    let stroke = Stroke {
        width: check.thickness as f32,
        line_cap: LineCap::Butt,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    pixmap.stroke_path(
        &check_path,
        &CHECK_STROKE.to_paint(),
        &stroke,
        Transform::identity(),
        None,
    );

    log::debug!(
        "rendered {}x{} canvas (check thickness {})",
        size,
        size,
        check.thickness
    );
    Ok(pixmap)
}

/// Encode a pixmap as a maximally compressed RGBA PNG.
///
/// tiny-skia keeps premultiplied pixels; PNG wants straight alpha, so every
/// pixel is demultiplied first.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, IconError> {
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    let mut buf = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buf, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(
        &rgba,
        pixmap.width(),
        pixmap.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}

/// Render the icon for `size` and write it to `output_path`, replacing any
/// existing file. The parent directory must already exist.
pub fn render_icon(size: u32, output_path: &Path) -> Result<(), IconError> {
    let pixmap = render_canvas(size)?;
    let bytes = encode_png(&pixmap)?;
    fs::write(output_path, bytes).map_err(|e| IconError::io(output_path, e))?;
    Ok(())
}

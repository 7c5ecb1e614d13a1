//! Parse generated SVG with `usvg` and rasterize it with `resvg`.
//!
//! SMIL is ignored by both, so previews of carousels should be produced from a
//! [`Motion::Frozen`](crate::render::carousel::Motion::Frozen) document.

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{BadgeError, BadgeResult};

const MAX_DIM: u32 = 16_384;

/// Straight-alpha RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PreviewImage {
    pub fn save_png(&self, path: &Path) -> BadgeResult<()> {
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// What a parsed document contains.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgStats {
    pub width: f32,
    pub height: f32,
    pub text_nodes: usize,
}

fn parse(svg: &str) -> BadgeResult<usvg::Tree> {
    let mut opts = usvg::Options::default();
    opts.fontdb_mut().load_system_fonts();
    usvg::Tree::from_str(svg, &opts).map_err(|e| BadgeError::render(format!("parse svg: {e}")))
}

fn count_text_nodes(group: &usvg::Group) -> usize {
    let mut n = 0usize;
    for child in group.children() {
        match child {
            usvg::Node::Group(g) => n += count_text_nodes(g.as_ref()),
            usvg::Node::Text(_) => n += 1,
            usvg::Node::Path(_) | usvg::Node::Image(_) => {}
        }
    }
    n
}

/// Parse `svg` and report its size and number of text nodes.
pub fn inspect(svg: &str) -> BadgeResult<SvgStats> {
    let tree = parse(svg)?;
    Ok(SvgStats {
        width: tree.size().width(),
        height: tree.size().height(),
        text_nodes: count_text_nodes(tree.root()),
    })
}

/// Rasterize `svg` at `scale` times its intrinsic size.
#[tracing::instrument(skip(svg), fields(bytes = svg.len()))]
pub fn rasterize(svg: &str, scale: f32) -> BadgeResult<PreviewImage> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(BadgeError::validation("preview scale must be finite and > 0"));
    }
    let tree = parse(svg)?;
    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;
    if width > MAX_DIM || height > MAX_DIM {
        return Err(BadgeError::render(format!(
            "preview size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| BadgeError::render("failed to allocate preview pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut data = pixmap.data().to_vec();
    unpremultiply_rgba8_in_place(&mut data);
    Ok(PreviewImage {
        width,
        height,
        data,
    })
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

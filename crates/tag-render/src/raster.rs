//! Bitmap capture of rendered labels.

use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbImage, RgbaImage};
use resvg::tiny_skia::{self, Pixmap};
use resvg::usvg::fontdb::{Database, Family, Query, Stretch, Style, Weight};
use resvg::usvg::{Options, Tree};
use tracing::{debug, warn};

use tag_model::LabelView;

use crate::error::{RenderError, Result};
use crate::style::{LABEL_WIDTH, LabelStyle};
use crate::svg::render_svg;

/// Turns a label into an opaque bitmap with the label's 2:1 aspect ratio.
pub trait Rasterizer {
    fn rasterize(&self, label: &LabelView) -> Result<RgbImage>;
}

/// Rasterizer backed by the SVG layout and `resvg`.
pub struct SvgRasterizer {
    style: LabelStyle,
    options: Options<'static>,
}

impl SvgRasterizer {
    /// Build a rasterizer, loading the configured font file (if any) and the
    /// system fonts once up front.
    ///
    /// A font family with no installed face is replaced by one that exists,
    /// so label text is never silently dropped. Fails when no font at all
    /// is available.
    pub fn new(mut style: LabelStyle) -> Result<Self> {
        let mut options = Options::default();
        let fontdb = options.fontdb_mut();
        if let Some(path) = &style.font_file
            && let Err(err) = fontdb.load_font_file(path)
        {
            warn!(path = %path.display(), error = %err, "failed to load label font");
        }
        fontdb.load_system_fonts();
        style.font_family = resolve_font_family(fontdb, &style.font_family)?;
        options.font_family = style.font_family.clone();
        debug!(
            faces = options.fontdb.len(),
            family = %options.font_family,
            "label fonts loaded"
        );
        Ok(Self { style, options })
    }
}

/// Families tried, in order, when the configured one is not installed.
const FALLBACK_FAMILIES: &[&str] = &[
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
    "Helvetica",
    "FreeSans",
];

fn resolve_font_family(db: &mut Database, requested: &str) -> Result<String> {
    if has_face(db, font_family(requested)) {
        return Ok(requested.to_string());
    }
    let fallback = FALLBACK_FAMILIES
        .iter()
        .copied()
        .find(|name| has_face(db, Family::Name(name)))
        .map(str::to_string)
        .or_else(|| {
            db.faces()
                .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        })
        .ok_or_else(|| RenderError::Raster("no fonts available for label text".to_string()))?;

    db.set_sans_serif_family(fallback.as_str());
    db.set_serif_family(fallback.as_str());
    db.set_monospace_family(fallback.as_str());
    db.set_cursive_family(fallback.as_str());
    db.set_fantasy_family(fallback.as_str());
    if matches!(font_family(requested), Family::Name(_)) {
        warn!(
            requested,
            fallback = %fallback,
            "label font family is not installed, using fallback"
        );
    } else {
        debug!(requested, fallback = %fallback, "generic font family remapped");
    }
    Ok(fallback)
}

fn font_family(name: &str) -> Family<'_> {
    match name {
        "serif" => Family::Serif,
        "sans-serif" => Family::SansSerif,
        "monospace" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        other => Family::Name(other),
    }
}

fn has_face(db: &Database, family: Family<'_>) -> bool {
    let query = Query {
        families: &[family],
        weight: Weight::BOLD,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };
    db.query(&query).is_some()
}

impl Rasterizer for SvgRasterizer {
    fn rasterize(&self, label: &LabelView) -> Result<RgbImage> {
        let svg = render_svg(label, &self.style)?;
        let tree =
            Tree::from_str(&svg, &self.options).map_err(|e| RenderError::Svg(e.to_string()))?;

        let (width, height) = self.style.raster_size();
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            RenderError::Raster(format!("cannot allocate {width}x{height} pixmap"))
        })?;
        let scale = width as f32 / LABEL_WIDTH as f32;
        let transform = tiny_skia::Transform::from_scale(scale, scale);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let rgba = RgbaImage::from_raw(width, height, pixmap.take())
            .ok_or_else(|| RenderError::Raster("pixmap size mismatch".to_string()))?;
        Ok(DynamicImage::ImageRgba8(rgba).to_rgb8())
    }
}

/// Save a label bitmap as `tag-0001.png` (1-based) inside `dir`.
pub fn write_preview_png(image: &RgbImage, dir: &Path, index: usize) -> Result<PathBuf> {
    let path = dir.join(format!("tag-{:04}.png", index + 1));
    image.save(&path).map_err(|e| RenderError::Write {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(path)
}

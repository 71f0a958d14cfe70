//! Swatch-grid preview of a palette.
//!
//! Tiles are laid out row by row in palette order. Gaps between tiles show
//! the dark outline color (black without outlines). When outlines are in
//! use a footer strip shows the light outline color.

use crate::error::RenderError;
use crate::models::PreviewConfig;
use shade_palette::{ByteColor, Palette};
use std::io::Cursor;
use tiny_skia::{Color, Paint, Pixmap, Rect, Transform};

/// Largest allowed preview edge in pixels
pub const MAX_DIMENSION: u32 = 8192;

/// Outline colors to show in the preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchOutlines {
    pub dark: ByteColor,
    pub light: ByteColor,
}

/// Computed pixel geometry of a preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchGeometry {
    pub columns: u32,
    pub rows: u32,
    pub width: u32,
    pub height: u32,
    /// Height of the outline footer, 0 when absent
    pub footer: u32,
}

impl SwatchGeometry {
    /// Work out the grid for `count` tiles
    pub fn new(
        count: usize,
        layout: PreviewConfig,
        with_footer: bool,
    ) -> Result<Self, RenderError> {
        if layout.tile_size == 0 {
            return Err(RenderError::InvalidLayout(
                "tile_size must be at least 1".to_string(),
            ));
        }
        if layout.columns == 0 {
            return Err(RenderError::InvalidLayout(
                "columns must be at least 1".to_string(),
            ));
        }

        let count = u32::try_from(count).unwrap_or(u32::MAX).max(1);
        let columns = layout.columns.min(count);
        let rows = count.div_ceil(columns);
        let footer = if with_footer {
            (layout.tile_size / 2).max(1)
        } else {
            0
        };

        let span = |tiles: u32| -> Option<u32> {
            tiles
                .checked_mul(layout.tile_size)?
                .checked_add(tiles.checked_add(1)?.checked_mul(layout.gap)?)
        };
        let width = span(columns);
        let height = span(rows).and_then(|h| {
            if with_footer {
                h.checked_add(footer)?.checked_add(layout.gap)
            } else {
                Some(h)
            }
        });

        match (width, height) {
            (Some(width), Some(height)) if width <= MAX_DIMENSION && height <= MAX_DIMENSION => {
                Ok(Self {
                    columns,
                    rows,
                    width,
                    height,
                    footer,
                })
            }
            (width, height) => Err(RenderError::ImageTooLarge {
                width: width.unwrap_or(u32::MAX),
                height: height.unwrap_or(u32::MAX),
            }),
        }
    }

    /// Top-left corner of tile `idx`
    pub fn tile_origin(&self, idx: u32, layout: PreviewConfig) -> (u32, u32) {
        let col = idx % self.columns;
        let row = idx / self.columns;
        (
            layout.gap + col * (layout.tile_size + layout.gap),
            layout.gap + row * (layout.tile_size + layout.gap),
        )
    }
}

fn solid_paint(color: ByteColor) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = false;
    paint
}

fn fill(pixmap: &mut Pixmap, x: u32, y: u32, w: u32, h: u32, color: ByteColor) {
    if let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) {
        pixmap.fill_rect(rect, &solid_paint(color), Transform::identity(), None);
    }
}

/// Draw the swatch grid into a pixmap
pub fn render_swatch_pixmap(
    palette: &Palette,
    outlines: Option<SwatchOutlines>,
    layout: PreviewConfig,
) -> Result<Pixmap, RenderError> {
    let geometry = SwatchGeometry::new(palette.len(), layout, outlines.is_some())?;

    let mut pixmap =
        Pixmap::new(geometry.width, geometry.height).ok_or(RenderError::PixmapAllocation)?;

    let background = outlines.map(|o| o.dark).unwrap_or(ByteColor::BLACK);
    pixmap.fill(Color::from_rgba8(
        background.r,
        background.g,
        background.b,
        255,
    ));

    for (idx, color) in palette.iter().enumerate() {
        let (x, y) = geometry.tile_origin(idx as u32, layout);
        fill(&mut pixmap, x, y, layout.tile_size, layout.tile_size, color);
    }

    if let Some(outlines) = outlines {
        let y = geometry.height - layout.gap - geometry.footer;
        let w = geometry.width - 2 * layout.gap;
        fill(&mut pixmap, layout.gap, y, w, geometry.footer, outlines.light);
    }

    tracing::debug!(
        width = geometry.width,
        height = geometry.height,
        tiles = palette.len(),
        "Rendered swatch preview"
    );

    Ok(pixmap)
}

/// Render the swatch grid as PNG bytes
pub fn render_swatch_png(
    palette: &Palette,
    outlines: Option<SwatchOutlines>,
    layout: PreviewConfig,
) -> Result<Vec<u8>, RenderError> {
    let pixmap = render_swatch_pixmap(palette, outlines, layout)?;

    // Every pixel is opaque, so premultiplied RGBA is plain RGB plus 255
    let rgb: Vec<u8> = pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let png_bytes = encode_png(pixmap.width(), pixmap.height(), &rgb)?;

    // Re-compress with oxipng (zopfli + adaptive filter selection)
    let optimized = oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    )
    .unwrap_or(png_bytes);

    Ok(optimized)
}

fn encode_png(width: u32, height: u32, rgb: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgb)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> PreviewConfig {
        PreviewConfig {
            tile_size: 10,
            columns: 2,
            gap: 1,
        }
    }

    fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8) {
        let p = pixmap.pixel(x, y).unwrap();
        (p.red(), p.green(), p.blue())
    }

    #[test]
    fn test_geometry_basic() {
        let g = SwatchGeometry::new(3, layout(), false).unwrap();
        assert_eq!((g.columns, g.rows), (2, 2));
        assert_eq!(g.width, 2 * 10 + 3);
        assert_eq!(g.height, 2 * 10 + 3);
        assert_eq!(g.footer, 0);
    }

    #[test]
    fn test_geometry_fewer_tiles_than_columns() {
        let g = SwatchGeometry::new(1, PreviewConfig::default(), false).unwrap();
        assert_eq!((g.columns, g.rows), (1, 1));
        assert_eq!(g.width, 32 + 4);
    }

    #[test]
    fn test_geometry_with_footer() {
        let g = SwatchGeometry::new(2, layout(), true).unwrap();
        assert_eq!(g.rows, 1);
        assert_eq!(g.footer, 5);
        assert_eq!(g.height, 10 + 2 + 5 + 1);
    }

    #[test]
    fn test_geometry_invalid_layout() {
        let zero_tiles = PreviewConfig {
            tile_size: 0,
            ..layout()
        };
        assert!(matches!(
            SwatchGeometry::new(4, zero_tiles, false),
            Err(RenderError::InvalidLayout(_))
        ));

        let zero_columns = PreviewConfig {
            columns: 0,
            ..layout()
        };
        assert!(matches!(
            SwatchGeometry::new(4, zero_columns, false),
            Err(RenderError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_geometry_too_large() {
        let huge = PreviewConfig {
            tile_size: 5000,
            columns: 4,
            gap: 0,
        };
        assert!(matches!(
            SwatchGeometry::new(4, huge, false),
            Err(RenderError::ImageTooLarge { .. })
        ));
    }

    #[test]
    fn test_tiles_in_palette_order() {
        let palette = Palette::from_hex(&["#ff0000", "#00ff00", "#0000ff"]).unwrap();
        let pixmap = render_swatch_pixmap(&palette, None, layout()).unwrap();

        assert_eq!(pixel(&pixmap, 5, 5), (255, 0, 0));
        assert_eq!(pixel(&pixmap, 16, 5), (0, 255, 0));
        assert_eq!(pixel(&pixmap, 5, 16), (0, 0, 255));
        // Gap and the unused fourth cell stay black
        assert_eq!(pixel(&pixmap, 0, 0), (0, 0, 0));
        assert_eq!(pixel(&pixmap, 16, 16), (0, 0, 0));
    }

    #[test]
    fn test_outline_colors_drawn() {
        let palette = Palette::from_hex(&["#808080"]).unwrap();
        let outlines = SwatchOutlines {
            dark: ByteColor::new(10, 20, 30),
            light: ByteColor::new(240, 230, 220),
        };
        let pixmap = render_swatch_pixmap(&palette, Some(outlines), layout()).unwrap();

        assert_eq!(pixel(&pixmap, 0, 0), (10, 20, 30));
        assert_eq!(pixel(&pixmap, 5, 5), (128, 128, 128));
        let footer_y = pixmap.height() - 2;
        assert_eq!(pixel(&pixmap, 5, footer_y), (240, 230, 220));
    }

    #[test]
    fn test_png_output() {
        let palette = Palette::from_hex(&["#000", "#fff", "#f00"]).unwrap();
        let bytes = render_swatch_png(&palette, None, layout()).unwrap();

        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let decoder = png::Decoder::new(Cursor::new(bytes));
        let reader = decoder.read_info().unwrap();
        assert_eq!(reader.info().width, 23);
        assert_eq!(reader.info().height, 23);
    }
}

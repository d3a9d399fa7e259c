//! Raster canvas: fills, strokes, and aligned text on an RGBA image.

use image::{ImageBuffer, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_rect_mut, draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut,
};
use imageproc::rect::Rect;
use rusttype::{point, Font, Scale};

use crate::error::{ChartError, ChartResult};
use crate::scale::Rgb;

/// Embedded fonts - DejaVu Sans, regular and bold.
const FONT_REGULAR: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
const FONT_BOLD: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// Horizontal text anchoring relative to the given x coordinate.
#[derive(Debug, Clone, Copy)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Text weight, selecting one of the embedded fonts.
#[derive(Debug, Clone, Copy)]
pub enum Weight {
    Regular,
    Bold,
}

/// A fixed-size RGBA drawing surface.
pub struct Canvas {
    img: RgbaImage,
    regular: Font<'static>,
    bold: Font<'static>,
}

impl Canvas {
    /// Create a canvas filled with the background color.
    ///
    /// Fails if either embedded font cannot be parsed; this is the only
    /// setup error the renderer can hit.
    pub fn new(width: u32, height: u32, background: Rgb) -> ChartResult<Self> {
        let regular = Font::try_from_bytes(FONT_REGULAR)
            .ok_or_else(|| ChartError::FontLoad("DejaVuSans.ttf".to_string()))?;
        let bold = Font::try_from_bytes(FONT_BOLD)
            .ok_or_else(|| ChartError::FontLoad("DejaVuSans-Bold.ttf".to_string()))?;
        let img = ImageBuffer::from_pixel(width, height, rgba(background));
        Ok(Self { img, regular, bold })
    }

    pub fn width(&self) -> u32 {
        self.img.width()
    }

    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Fill an axis-aligned rectangle.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgb) {
        if w == 0 || h == 0 {
            return;
        }
        draw_filled_rect_mut(&mut self.img, Rect::at(x, y).of_size(w, h), rgba(color));
    }

    /// Outline a rectangle with a stroke of the given thickness, drawn
    /// inward from the rectangle bounds.
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: u32, h: u32, thickness: u32, color: Rgb) {
        for inset in 0..thickness {
            let (iw, ih) = (w.saturating_sub(inset * 2), h.saturating_sub(inset * 2));
            if iw < 2 || ih < 2 {
                break;
            }
            draw_hollow_rect_mut(
                &mut self.img,
                Rect::at(x + inset as i32, y + inset as i32).of_size(iw, ih),
                rgba(color),
            );
        }
    }

    /// Horizontal line from `x0` to `x1` at `y`, one pixel thick.
    pub fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Rgb) {
        draw_line_segment_mut(
            &mut self.img,
            (x0 as f32, y as f32),
            (x1 as f32, y as f32),
            rgba(color),
        );
    }

    /// Vertical line from `y0` to `y1` at `x`, one pixel thick.
    pub fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgb) {
        draw_line_segment_mut(
            &mut self.img,
            (x as f32, y0 as f32),
            (x as f32, y1 as f32),
            rgba(color),
        );
    }

    /// Draw text anchored at `x` with the given alignment, with `baseline_y`
    /// as the text baseline.
    pub fn text(
        &mut self,
        text: &str,
        x: i32,
        baseline_y: i32,
        size: f32,
        weight: Weight,
        align: Align,
        color: Rgb,
    ) {
        let font = match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        };
        let scale = Scale::uniform(size);

        let width = measure(font, text, scale);
        let x = match align {
            Align::Left => x as f32,
            Align::Center => x as f32 - width / 2.0,
            Align::Right => x as f32 - width,
        };
        let top = baseline_y as f32 - font.v_metrics(scale).ascent;

        draw_text_mut(
            &mut self.img,
            rgba(color),
            x.round() as i32,
            top.round() as i32,
            scale,
            font,
            text,
        );
    }

    /// Advance width of a string at the given size and weight.
    pub fn text_width(&self, text: &str, size: f32, weight: Weight) -> f32 {
        measure(self.font(weight), text, Scale::uniform(size))
    }

    /// Consume the canvas, yielding the finished image.
    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    fn font(&self, weight: Weight) -> &Font<'static> {
        match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        }
    }
}

/// Total advance width of laid-out glyphs.
fn measure(font: &Font, text: &str, scale: Scale) -> f32 {
    font.layout(text, scale, point(0.0, 0.0))
        .last()
        .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
        .unwrap_or(0.0)
}

fn rgba(color: Rgb) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_background() {
        let canvas = Canvas::new(4, 3, Rgb::new(10, 20, 30)).unwrap();
        let img = canvas.into_image();
        assert_eq!(img.dimensions(), (4, 3));
        for pixel in img.pixels() {
            assert_eq!(pixel.0, [10, 20, 30, 255]);
        }
    }

    #[test]
    fn test_fill_rect_covers_exact_bounds() {
        let mut canvas = Canvas::new(8, 8, Rgb::new(0, 0, 0)).unwrap();
        canvas.fill_rect(2, 2, 3, 3, Rgb::new(255, 0, 0));
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(2, 2).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(4, 4).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(5, 5).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 2).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut canvas = Canvas::new(10, 10, Rgb::new(0, 0, 0)).unwrap();
        canvas.stroke_rect(1, 1, 8, 8, 2, Rgb::new(0, 255, 0));
        let img = canvas.into_image();
        assert_eq!(img.get_pixel(1, 1).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(2, 2).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(5, 5).0, [0, 0, 0, 255]);
    }

    #[test]
    fn test_text_width_grows_with_content() {
        let canvas = Canvas::new(4, 4, Rgb::new(0, 0, 0)).unwrap();
        let short = canvas.text_width("Jan", 13.0, Weight::Bold);
        let long = canvas.text_width("January", 13.0, Weight::Bold);
        assert!(short > 0.0);
        assert!(long > short);
    }
}

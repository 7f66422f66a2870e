// File: crates/csv-chart/src/text.rs
// Summary: Label measuring/drawing on top of the platform default typeface.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    typeface: Option<skia::Typeface>,
}

impl TextShaper {
    pub fn new() -> Self {
        let typeface = skia::FontMgr::default().legacy_make_typeface(None, skia::FontStyle::normal());
        if typeface.is_none() {
            log::warn!("no system typeface found, falling back to the default font");
        }
        Self { typeface }
    }

    fn font(&self, size: f32) -> skia::Font {
        let size = size.max(1.0);
        match &self.typeface {
            Some(tf) => skia::Font::new(tf.clone(), size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size);
                font
            }
        }
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let (advance, _bounds) = self.font(size).measure_str(text, None);
        advance
    }

    /// Draw `text` with its baseline at `y`, anchored horizontally at `x` per `align`.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        size: f32,
        color: skia::Color,
        align: Align,
    ) {
        if text.is_empty() {
            return;
        }
        let font = self.font(size);
        let width = font.measure_str(text, None).0;
        let left = match align {
            Align::Left => x,
            Align::Center => x - width * 0.5,
            Align::Right => x - width,
        };

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color);
        canvas.draw_str(text, (left, y), &font, &paint);
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

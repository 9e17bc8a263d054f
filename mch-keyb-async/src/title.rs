//! The optional title drawn above the keyboard.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Line, PrimitiveStyle},
    text::{renderer::TextRenderer, Baseline, Text},
};

use crate::bridge::BridgeConfig;
use crate::widget::Palette;

/// Blank row under the text plus the separator row.
const MIN_MARGIN: u32 = 2;

/// Font and size chosen for a title.
#[derive(Debug, Clone, Copy)]
pub struct TitleLayout {
    font: &'static MonoFont<'static>,
    size: Size,
}

fn text_size(font: &MonoFont<'_>, title: &str) -> Size {
    MonoTextStyle::new(font, BinaryColor::On)
        .measure_string(title, Point::zero(), Baseline::Top)
        .bounding_box
        .size
}

impl TitleLayout {
    /// Measures `title` with the large title font, falling back to the small
    /// one when it is wider than `canvas_width` or taller than
    /// [`BridgeConfig::title_max_height`].
    pub fn measure(title: &str, canvas_width: u32, config: &BridgeConfig) -> Self {
        let size = text_size(config.title_font, title);
        if size.width > canvas_width || size.height > config.title_max_height {
            let font = config.title_font_small;
            return Self {
                font,
                size: text_size(font, title),
            };
        }
        Self {
            font: config.title_font,
            size,
        }
    }

    /// Rows taken from the top of the canvas: the text followed by `margin`
    /// rows, at least 2, the last of which holds the separator.
    pub fn reserved_height(&self, margin: u32) -> u32 {
        self.size.height + margin.max(MIN_MARGIN)
    }

    /// Clears `target`, draws `title` centered at the top and a separator on
    /// the last reserved row, directly above the keyboard.
    ///
    /// The separator runs from x = 1 to the right edge, leaving the leftmost
    /// column blank like the badge firmware does.
    pub fn draw<D>(
        &self,
        target: &mut D,
        title: &str,
        margin: u32,
        palette: Palette<D::Color>,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget,
    {
        let width = target.bounding_box().size.width;
        target.clear(palette.background)?;

        let x = width.saturating_sub(self.size.width) / 2;
        Text::with_baseline(
            title,
            Point::new(x as i32, 0),
            MonoTextStyle::new(self.font, palette.foreground),
            Baseline::Top,
        )
        .draw(target)?;

        let y = self.reserved_height(margin) as i32 - 1;
        Line::new(Point::new(1, y), Point::new(width as i32 - 1, y))
            .into_styled(PrimitiveStyle::with_stroke(palette.foreground, 1))
            .draw(target)?;
        Ok(())
    }
}

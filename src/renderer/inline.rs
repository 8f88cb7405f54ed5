//! Inline renderer for the cell row.
//!
//! Writes the widget as one line in the normal terminal buffer:
//!
//! ```text
//! [1][2][•][ ]
//! ```
//!
//! Each render returns to column 0, clears the line and redraws it, so the
//! row updates in place without taking over the screen.

use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};

use crate::types::{Attr, CellView, Rgba};

const OPEN: char = '[';
const CLOSE: char = ']';

/// Inline renderer for a row of pin cells.
#[derive(Debug, Default)]
pub struct InlineRenderer {
    drawn: bool,
}

impl InlineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redraw the row in place.
    pub fn render<W: Write>(&mut self, out: &mut W, views: &[CellView]) -> io::Result<()> {
        if self.drawn {
            queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        }

        for view in views {
            let (fg, bg, attrs) = view.style();
            queue!(out, Print(OPEN))?;
            queue!(
                out,
                SetForegroundColor(to_color(fg)),
                SetBackgroundColor(to_color(bg))
            )?;
            queue_attrs(out, attrs)?;
            queue!(
                out,
                Print(view.glyph),
                SetAttribute(Attribute::Reset),
                ResetColor,
                Print(CLOSE)
            )?;
        }

        out.flush()?;
        self.drawn = true;
        Ok(())
    }

    /// Erase the row.
    pub fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.drawn {
            queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
            out.flush()?;
            self.drawn = false;
        }
        Ok(())
    }

    pub fn has_drawn(&self) -> bool {
        self.drawn
    }
}

/// The row without escape codes.
pub fn plain_line(views: &[CellView]) -> String {
    views
        .iter()
        .flat_map(|v| [OPEN, v.glyph, CLOSE])
        .collect()
}

/// Map to a crossterm color. Terminal default becomes `Color::Reset`.
pub fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        return Color::Reset;
    }
    Color::Rgb {
        r: color.r.clamp(0, 255) as u8,
        g: color.g.clamp(0, 255) as u8,
        b: color.b.clamp(0, 255) as u8,
    }
}

fn queue_attrs<W: Write>(out: &mut W, attrs: Attr) -> io::Result<()> {
    if attrs.contains(Attr::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if attrs.contains(Attr::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if attrs.contains(Attr::UNDERLINE) {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if attrs.contains(Attr::INVERSE) {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellFlags;
    use pretty_assertions::assert_eq;

    fn views() -> Vec<CellView> {
        vec![
            CellView {
                glyph: '1',
                flags: CellFlags::FILLED,
            },
            CellView {
                glyph: '•',
                flags: CellFlags::FILLED | CellFlags::MASKED,
            },
            CellView {
                glyph: ' ',
                flags: CellFlags::FOCUSED,
            },
        ]
    }

    #[test]
    fn test_plain_line() {
        assert_eq!(plain_line(&views()), "[1][•][ ]");
        assert_eq!(plain_line(&[]), "");
    }

    #[test]
    fn test_to_color() {
        assert_eq!(to_color(Rgba::TERMINAL_DEFAULT), Color::Reset);
        assert_eq!(
            to_color(Rgba::INVALID_FG),
            Color::Rgb {
                r: 0xb9,
                g: 0x4a,
                b: 0x48
            }
        );
    }

    #[test]
    fn test_render_writes_glyphs() {
        let mut renderer = InlineRenderer::new();
        let mut out = Vec::new();
        renderer.render(&mut out, &views()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('1'));
        assert!(text.contains('•'));
        // Focused cell is drawn reversed
        assert!(text.contains("\x1b[7m"));
        assert!(renderer.has_drawn());
    }

    #[test]
    fn test_redraw_clears_line_first() {
        let mut renderer = InlineRenderer::new();
        let mut first = Vec::new();
        renderer.render(&mut first, &views()).unwrap();
        assert!(!String::from_utf8(first).unwrap().contains("\x1b[2K"));

        let mut second = Vec::new();
        renderer.render(&mut second, &views()).unwrap();
        assert!(String::from_utf8(second).unwrap().starts_with("\x1b[1G\x1b[2K"));
    }

    #[test]
    fn test_clear_resets() {
        let mut renderer = InlineRenderer::new();
        let mut out = Vec::new();
        renderer.clear(&mut out).unwrap();
        assert!(out.is_empty());

        renderer.render(&mut out, &views()).unwrap();
        renderer.clear(&mut out).unwrap();
        assert!(!renderer.has_drawn());
    }
}

//! Inline styled output for rendered lines.
//!
//! Writes a ratatui [`Line`] straight to a writer as ANSI escapes, for
//! printing status lines into scrollback without taking over the screen.

use crossterm::queue;
use crossterm::style::{
    Attribute, Color as TermColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use ratatui::style::{Color, Modifier};
use ratatui::text::Line;
use std::io::{self, Write};

const ATTRIBUTES: [(Modifier, Attribute); 3] = [
    (Modifier::BOLD, Attribute::Bold),
    (Modifier::DIM, Attribute::Dim),
    (Modifier::ITALIC, Attribute::Italic),
];

/// Write `line` followed by a newline, resetting attributes after every span.
pub fn write_line<W: Write>(out: &mut W, line: &Line<'_>) -> io::Result<()> {
    for span in &line.spans {
        let style = line.style.patch(span.style);
        if let Some(fg) = style.fg {
            queue!(out, SetForegroundColor(term_color(fg)))?;
        }
        if let Some(bg) = style.bg {
            queue!(out, SetBackgroundColor(term_color(bg)))?;
        }
        for (modifier, attribute) in ATTRIBUTES {
            if style.add_modifier.contains(modifier) {
                queue!(out, SetAttribute(attribute))?;
            }
        }
        queue!(
            out,
            Print(span.content.as_ref()),
            SetAttribute(Attribute::Reset)
        )?;
    }
    queue!(out, Print("\n"))?;
    out.flush()
}

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}

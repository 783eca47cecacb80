//! Theme system for tool status rendering
//!
//! Themes are TOML files with a named palette and per-component styles.
//! A few are bundled with the crate; users can add more under the uigen
//! config directory.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumIter};
use thiserror::Error;

mod loader;

pub use loader::ThemeLoader;

/// Errors that can occur during theme operations
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Theme not found: {0}")]
    NotFound(String),

    #[error("Color not found in palette: {0}")]
    ColorNotFound(String),

    #[error("Invalid color value: {0}")]
    InvalidColor(String),
}

/// A color value: a palette name, or a direct color (hex or named)
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct ColorValue(pub String);

/// Style definition for a component
#[derive(Debug, Clone, Deserialize)]
pub struct ComponentStyle {
    pub fg: Option<ColorValue>,
    pub bg: Option<ColorValue>,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub dim: bool,
}

/// Raw theme as loaded from TOML file
#[derive(Debug, Clone, Deserialize)]
pub struct RawTheme {
    pub name: String,
    #[serde(default)]
    pub palette: HashMap<String, RgbColor>,
    #[serde(default)]
    pub components: HashMap<Component, ComponentStyle>,
}

pub type Theme = CompiledTheme;

/// RGB color deserialized from a `#rrggbb` string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_hex(&s).ok_or_else(|| serde::de::Error::custom(format!("Invalid hex color: {s}")))
    }
}

impl From<RgbColor> for Color {
    fn from(rgb: RgbColor) -> Self {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    }
}

fn parse_hex(s: &str) -> Option<RgbColor> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(RgbColor(r, g, b))
}

/// All themeable parts of a tool status line
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Deserialize, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Component {
    /// Raw tool name prefix
    ToolCallHeader,
    /// The formatted status message
    ToolLabel,
    /// Spinner glyph while a tool is running
    ToolPending,
    /// Filled dot once a tool has a result
    ToolSuccess,
}

/// Compiled theme ready for use in the TUI
#[derive(Debug, Clone)]
pub struct CompiledTheme {
    pub name: String,
    pub styles: HashMap<Component, Style>,
    pub background_color: Option<Color>,
}

impl RawTheme {
    /// Compile the theme into a usable format
    pub fn into_theme(self) -> Result<Theme, ThemeError> {
        let mut styles = HashMap::new();

        let background_color = self.palette.get("background").map(|&rgb| rgb.into());

        for (component, style_def) in &self.components {
            let mut style = Style::default();

            if let Some(fg) = &style_def.fg {
                style = style.fg(self.resolve_color(fg)?);
            }
            if let Some(bg) = &style_def.bg {
                style = style.bg(self.resolve_color(bg)?);
            }

            if style_def.bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            if style_def.italic {
                style = style.add_modifier(Modifier::ITALIC);
            }
            if style_def.dim {
                style = style.add_modifier(Modifier::DIM);
            }

            styles.insert(*component, style);
        }

        Ok(Theme {
            name: self.name,
            styles,
            background_color,
        })
    }

    /// Palette names win over direct colors of the same spelling
    fn resolve_color(&self, color: &ColorValue) -> Result<Color, ThemeError> {
        if let Some(&rgb) = self.palette.get(&color.0) {
            return Ok(rgb.into());
        }
        match parse_direct_color(&color.0) {
            Ok(color) => Ok(color),
            Err(_) if !color.0.starts_with('#') => Err(ThemeError::ColorNotFound(color.0.clone())),
            Err(e) => Err(e),
        }
    }
}

/// Parse a direct color string (hex or named)
fn parse_direct_color(color_str: &str) -> Result<Color, ThemeError> {
    if color_str.starts_with('#') {
        return parse_hex(color_str)
            .map(Color::from)
            .ok_or_else(|| ThemeError::InvalidColor(color_str.to_string()));
    }

    match color_str.to_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "white" => Ok(Color::White),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Ok(Color::DarkGray),
        "lightred" | "light_red" => Ok(Color::LightRed),
        "lightgreen" | "light_green" => Ok(Color::LightGreen),
        "lightyellow" | "light_yellow" => Ok(Color::LightYellow),
        "lightblue" | "light_blue" => Ok(Color::LightBlue),
        "lightmagenta" | "light_magenta" => Ok(Color::LightMagenta),
        "lightcyan" | "light_cyan" => Ok(Color::LightCyan),
        "reset" => Ok(Color::Reset),
        _ => Err(ThemeError::InvalidColor(color_str.to_string())),
    }
}

impl CompiledTheme {
    /// Get a style for a component, falling back to default if not found
    pub fn style(&self, component: Component) -> Style {
        self.styles.get(&component).copied().unwrap_or_default()
    }

    pub fn get_background_color(&self) -> Option<Color> {
        self.background_color
    }
}

impl Default for CompiledTheme {
    fn default() -> Self {
        create_default_theme()
    }
}

/// Emerald dot and blue spinner, as in the web chat
fn create_default_theme() -> CompiledTheme {
    let mut styles = HashMap::new();

    styles.insert(Component::ToolCallHeader, Style::default().fg(Color::Cyan));
    styles.insert(Component::ToolLabel, Style::default().fg(Color::Gray));
    styles.insert(
        Component::ToolPending,
        Style::default()
            .fg(Color::Rgb(37, 99, 235))
            .add_modifier(Modifier::BOLD),
    );
    styles.insert(
        Component::ToolSuccess,
        Style::default().fg(Color::Rgb(16, 185, 129)),
    );

    CompiledTheme {
        name: "Default".to_string(),
        styles,
        background_color: None,
    }
}

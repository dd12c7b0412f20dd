//! Plain value types carried by widgets: colors, fonts, borders and the
//! layout/constraint vocabulary used by containers.

use std::fmt;

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Font description. Sizes are in points.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
}

impl Font {
    pub const DEFAULT_SIZE: f32 = 12.0;

    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
        }
    }

    /// Returns a copy of this font with a different size.
    pub fn derive_size(&self, size: f32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// Returns a copy of this font with the bold flag set.
    pub fn derive_bold(&self, bold: bool) -> Self {
        Self {
            bold,
            ..self.clone()
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Dialog", Self::DEFAULT_SIZE)
    }
}

/// A widget border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Border {
    /// A solid line of the given color and thickness (in pixels).
    Line { color: Color, thickness: u16 },
    /// Empty space around the widget.
    Empty {
        top: u16,
        left: u16,
        bottom: u16,
        right: u16,
    },
}

impl Border {
    pub fn line(color: Color) -> Self {
        Border::Line {
            color,
            thickness: 1,
        }
    }

    pub fn empty(all: u16) -> Self {
        Border::Empty {
            top: all,
            left: all,
            bottom: all,
            right: all,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

/// The layout manager a container is configured with.
///
/// Only the *kind* of layout matters here: it decides whether children can be
/// appended without a placement constraint. Geometry is not computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    #[default]
    Flow,
    Box(Axis),
    Grid { rows: u16, columns: u16 },
    Border,
    Card,
    GridBag,
}

impl Layout {
    /// True for layouts where every child needs a placement constraint, so
    /// builders must not append children on their own.
    pub fn requires_constraints(&self) -> bool {
        matches!(self, Layout::Border | Layout::Card | Layout::GridBag)
    }
}

/// Where a child sits inside its parent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Constraint {
    North,
    South,
    East,
    West,
    Center,
    /// Left/top side of a split pane.
    Leading,
    /// Right/bottom side of a split pane.
    Trailing,
    /// A named card in a card layout.
    Card(String),
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::North => f.write_str("north"),
            Constraint::South => f.write_str("south"),
            Constraint::East => f.write_str("east"),
            Constraint::West => f.write_str("west"),
            Constraint::Center => f.write_str("center"),
            Constraint::Leading => f.write_str("leading"),
            Constraint::Trailing => f.write_str("trailing"),
            Constraint::Card(name) => write!(f, "card:{name}"),
        }
    }
}

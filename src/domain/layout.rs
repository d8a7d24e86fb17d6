// Placement of a widget on the screenboard grid
use crate::domain::wire_enum::wire_enum;
use crate::error::{Error, Result};

/// Grid position of a widget's top-left corner. Negative values place the
/// widget off-canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width and height in grid cells, both at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 {
            return Err(Error::invalid_argument("width must be at least 1"));
        }
        if height == 0 {
            return Err(Error::invalid_argument("height must be at least 1"));
        }
        Ok(Self { width, height })
    }

    /// Sizes fixed at compile time; a zero side fails const evaluation.
    pub(crate) const fn fixed(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0);
        Self { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

wire_enum! {
    /// Horizontal alignment of a title or text body.
    pub enum Alignment("alignment") {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::Left
    }
}

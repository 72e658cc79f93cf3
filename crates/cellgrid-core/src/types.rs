//! Core value types for grid layout.
//!
//! All extents are integer pixels. Cell coordinates and spans are unsigned
//! indices into the grid's columns and rows.

/// Width/height pair reported by components and grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0, height: 0 };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grow this size by the given insets on every side.
    pub fn outset(&self, gaps: &Gaps) -> Size {
        Size::new(self.width + gaps.width(), self.height + gaps.height())
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a rectangle with position and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle at the origin.
    pub fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Shrink the rectangle by per-side insets.
    pub fn inset(&self, gaps: &Gaps) -> Rect {
        Rect::new(
            self.x + gaps.left,
            self.y + gaps.top,
            self.width - gaps.width(),
            self.height - gaps.height(),
        )
    }

    /// Grow the rectangle by per-side insets.
    pub fn outset(&self, gaps: &Gaps) -> Rect {
        Rect::new(
            self.x - gaps.left,
            self.y - gaps.top,
            self.width + gaps.width(),
            self.height + gaps.height(),
        )
    }
}

/// Per-side spacing around a cell, or insets of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gaps {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

impl Gaps {
    pub const EMPTY: Gaps = Gaps { top: 0, left: 0, bottom: 0, right: 0 };

    pub fn new(top: i32, left: i32, bottom: i32, right: i32) -> Self {
        Self { top, left, bottom, right }
    }

    /// Same gap on every side.
    pub fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Total horizontal gap.
    pub fn width(&self) -> i32 {
        self.left + self.right
    }

    /// Total vertical gap.
    pub fn height(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Extra spacing attached to a grid column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HorizontalGaps {
    pub left: i32,
    pub right: i32,
}

impl HorizontalGaps {
    pub const EMPTY: HorizontalGaps = HorizontalGaps { left: 0, right: 0 };

    pub fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    pub fn width(&self) -> i32 {
        self.left + self.right
    }
}

/// Extra spacing attached to a grid row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerticalGaps {
    pub top: i32,
    pub bottom: i32,
}

impl VerticalGaps {
    pub const EMPTY: VerticalGaps = VerticalGaps { top: 0, bottom: 0 };

    pub fn new(top: i32, bottom: i32) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Horizontal placement of a component inside its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlign {
    /// Anchor at the cell start
    #[default]
    Left,
    /// Split the leftover width evenly
    Center,
    /// Anchor at the cell end
    Right,
    /// Use the full cell width
    Fill,
}

/// Vertical placement of a component inside its cell.
///
/// Every alignment except [`VerticalAlign::Fill`] takes part in baseline
/// alignment when the component reports a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
    Fill,
}

/// Placement of one cell inside a grid.
///
/// A cell occupies columns `[x, x + width)` and rows `[y, y + height)`.
/// Spans must be at least 1. A zero span is a contract violation: such a
/// cell occupies nothing and contributes no size, but it is not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraints {
    /// Origin column
    pub x: usize,
    /// Origin row
    pub y: usize,
    /// Column span
    pub width: usize,
    /// Row span
    pub height: usize,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    /// Space reserved around the component inside the cell
    pub gaps: Gaps,
    /// Border the component paints itself. Excluded from the space the grid
    /// allocates, restored when the final bounds are set.
    pub visual_paddings: Gaps,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Constraints {
    /// A 1x1 cell at column `x`, row `y` with default alignment.
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            width: 1,
            height: 1,
            horizontal_align: HorizontalAlign::default(),
            vertical_align: VerticalAlign::default(),
            gaps: Gaps::EMPTY,
            visual_paddings: Gaps::EMPTY,
        }
    }

    /// Set the column and row span.
    pub fn span(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn align(mut self, horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        self.horizontal_align = horizontal;
        self.vertical_align = vertical;
        self
    }

    /// Shorthand for `Fill`/`Fill` alignment.
    pub fn fill(self) -> Self {
        self.align(HorizontalAlign::Fill, VerticalAlign::Fill)
    }

    pub fn gaps(mut self, gaps: Gaps) -> Self {
        self.gaps = gaps;
        self
    }

    pub fn visual_paddings(mut self, paddings: Gaps) -> Self {
        self.visual_paddings = paddings;
        self
    }

    /// Whether the cell covers column `x` and row `y`.
    pub fn occupies(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Whether the two cell rectangles share at least one grid position.
    pub fn intersects(&self, other: &Constraints) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

//! Core geometry types: Point, Size, Rect, EdgeInsets.
//!
//! These are the resolved geometry values handed to the renderer adapter. All
//! lengths are in points (`f32`), the unit theme documents are written in.

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D position, resolved from a `{x, y}` mapping.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size (width x height), resolved from a `{width, height}` mapping.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A frame: an origin plus a size.
///
/// Specifiers carry position and size separately; the adapter combines them
/// into a `Rect` when it creates a widget.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// An empty rect at the origin.
    pub const ZERO: Rect = Rect { origin: Point::ZERO, size: Size::ZERO };

    /// Create a rect from origin and size.
    #[inline]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Contract the rect inward by the given [`EdgeInsets`].
    ///
    /// Width and height are clamped to zero to avoid negative dimensions.
    #[inline]
    pub fn inset(self, insets: EdgeInsets) -> Rect {
        let w = self.size.width - insets.left - insets.right;
        let h = self.size.height - insets.top - insets.bottom;
        Rect {
            origin: Point::new(self.origin.x + insets.left, self.origin.y + insets.top),
            size: Size::new(w.max(0.0), h.max(0.0)),
        }
    }
}

// ---------------------------------------------------------------------------
// EdgeInsets
// ---------------------------------------------------------------------------

/// Insets on the four sides of a rectangle, used for padding and border insets.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    /// Zero insets on all sides.
    pub const ZERO: EdgeInsets = EdgeInsets { top: 0.0, left: 0.0, bottom: 0.0, right: 0.0 };

    /// Create insets with explicit values for each side.
    #[inline]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self { top, left, bottom, right }
    }

    /// All four sides set to the same value.
    #[inline]
    pub const fn all(value: f32) -> Self {
        Self { top: value, left: value, bottom: value, right: value }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

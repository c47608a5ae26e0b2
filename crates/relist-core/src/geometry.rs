#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Surface coordinates are signed: a dragged item may be pulled above or to
//! the left of the list root, so positions are `i32` rather than cell
//! indices. The origin is top-left and `y` grows downward.

/// A point on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - other`.
    #[inline]
    #[must_use]
    pub const fn offset_from(self, other: Position) -> Position {
        Position::new(
            self.x.saturating_sub(other.x),
            self.y.saturating_sub(other.y),
        )
    }

    /// Translate by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub const fn translate(self, dx: i32, dy: i32) -> Position {
        Position::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a new size. Negative extents clamp to zero.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }
}

/// A rectangle for layout bounds and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in surface units.
    pub width: i32,
    /// Height in surface units.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at `origin` with the given size.
    #[inline]
    pub const fn from_origin(origin: Position, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Position {
        Position::new(self.x, self.y)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x && pos.x < self.right() && pos.y >= self.y && pos.y < self.bottom()
    }

    /// Translate a rectangle given in `self`-local coordinates onto the
    /// surface.
    #[inline]
    #[must_use]
    pub const fn offset_local(&self, local: Rect) -> Rect {
        Rect::new(
            self.x.saturating_add(local.x),
            self.y.saturating_add(local.y),
            local.width,
            local.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Position, Rect, Size};

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(Position::new(2, 3)));
        assert!(rect.contains(Position::new(5, 7)));
        assert!(!rect.contains(Position::new(6, 3)));
        assert!(!rect.contains(Position::new(2, 8)));
    }

    #[test]
    fn rect_contains_negative_origin() {
        let rect = Rect::new(-4, -4, 4, 4);
        assert!(rect.contains(Position::new(-1, -1)));
        assert!(!rect.contains(Position::new(0, 0)));
    }

    #[test]
    fn offset_local_moves_into_parent_space() {
        let parent = Rect::new(10, 20, 100, 30);
        let handle = Rect::new(2, 3, 8, 8);
        assert_eq!(parent.offset_local(handle), Rect::new(12, 23, 8, 8));
    }

    #[test]
    fn position_arithmetic() {
        let a = Position::new(15, 40);
        let b = Position::new(10, 32);
        assert_eq!(a.offset_from(b), Position::new(5, 8));
        assert_eq!(b.translate(5, 8), a);
    }

    #[test]
    fn size_clamps_negative() {
        assert_eq!(Size::new(-3, 7), Size::new(0, 7));
    }
}

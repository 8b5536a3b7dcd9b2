//! Candidate rectangles in image pixel space.

/// An axis-aligned rectangle in pixel coordinates, right and bottom exclusive.
///
/// Like the other value types this does not enforce `left < right` or
/// `top < bottom`; strategies that produce candidates are responsible for
/// emitting well-formed rectangles inside the image bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    #[inline]
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Width in pixels; zero if the rectangle is malformed.
    #[inline]
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height in pixels; zero if the rectangle is malformed.
    #[inline]
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Returns true if the rectangle is non-empty and lies within an image of
    /// the given dimensions.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left < self.right
            && self.top < self.bottom
            && self.right <= width
            && self.bottom <= height
    }
}

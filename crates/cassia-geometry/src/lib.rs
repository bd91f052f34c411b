//! Plain geometry primitives.
//!
//! [§ 3. The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
//!
//! "Each box has a content area and optional surrounding padding, border,
//! and margin areas." This crate carries only the content-area shape: an
//! unpositioned rectangle with a derived area.

use serde::{Deserialize, Serialize};

/// A width/height rectangle with no position.
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
///
/// Carries its two extents verbatim; the area is derived on access and
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its two extents. No validation is applied.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The area of the rectangle, computed fresh on every call.
    #[must_use]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

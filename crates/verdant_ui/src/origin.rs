//! Anchor origins.
//!
//! An [`Origin`] names the point of an entity's bounding box that coincides
//! with its anchor. Resolution depends only on the anchor, the origin and the
//! entity's extents; transition and filter state never feed into it.

use verdant_core::Vec2;

/// Which point of the bounding box the anchor designates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Origin {
    /// Top-left corner.
    TopLeft,
    /// Middle of the top edge.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Middle of the left edge.
    CenterLeft,
    /// Center of the box.
    #[default]
    CenterCenter,
    /// Middle of the right edge.
    CenterRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Middle of the bottom edge.
    BottomCenter,
    /// Bottom-right corner.
    BottomRight,
}

impl Origin {
    /// Every origin, row by row.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::CenterLeft,
        Self::CenterCenter,
        Self::CenterRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Position of the anchor inside the box, as fractions of width and height
    /// measured from the top-left corner.
    #[must_use]
    pub const fn factors(self) -> (f32, f32) {
        match self {
            Self::TopLeft => (0.0, 0.0),
            Self::TopCenter => (0.5, 0.0),
            Self::TopRight => (1.0, 0.0),
            Self::CenterLeft => (0.0, 0.5),
            Self::CenterCenter => (0.5, 0.5),
            Self::CenterRight => (1.0, 0.5),
            Self::BottomLeft => (0.0, 1.0),
            Self::BottomCenter => (0.5, 1.0),
            Self::BottomRight => (1.0, 1.0),
        }
    }

    /// Top-left corner of a `width` x `height` box anchored at `anchor`.
    #[must_use]
    pub fn top_left(self, anchor: Vec2, width: f32, height: f32) -> Vec2 {
        let (fx, fy) = self.factors();
        Vec2::new(anchor.x - width * fx, anchor.y - height * fy)
    }

    /// Center of a `width` x `height` box anchored at `anchor`.
    #[must_use]
    pub fn center(self, anchor: Vec2, width: f32, height: f32) -> Vec2 {
        let (fx, fy) = self.factors();
        Vec2::new(anchor.x + width * (0.5 - fx), anchor.y + height * (0.5 - fy))
    }

    /// Looks up an origin by its snake_case name, e.g. `"bottom_right"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let origin = match name {
            "top_left" => Self::TopLeft,
            "top_center" => Self::TopCenter,
            "top_right" => Self::TopRight,
            "center_left" => Self::CenterLeft,
            "center_center" | "center" => Self::CenterCenter,
            "center_right" => Self::CenterRight,
            "bottom_left" => Self::BottomLeft,
            "bottom_center" => Self::BottomCenter,
            "bottom_right" => Self::BottomRight,
            _ => return None,
        };
        Some(origin)
    }
}

use crate::foundation::core::{Point, Size, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "corner")]
/// Host corner a badge is pinned to, with a signed offset from that corner.
///
/// Badges straddle the host edge by half their own height, so a zero offset
/// already overlaps the corner.
pub enum BadgeAlignment {
    /// Top-left corner.
    TopLeading {
        /// Horizontal offset; positive moves right.
        x: f64,
        /// Vertical offset; positive moves down.
        y: f64,
    },
    /// Top-right corner (default).
    TopTrailing {
        /// Horizontal offset; positive moves right.
        x: f64,
        /// Vertical offset; positive moves down.
        y: f64,
    },
    /// Bottom-left corner.
    BottomLeading {
        /// Horizontal offset; positive moves right.
        x: f64,
        /// Vertical offset; positive moves down.
        y: f64,
    },
    /// Bottom-right corner.
    BottomTrailing {
        /// Horizontal offset; positive moves right.
        x: f64,
        /// Vertical offset; positive moves down.
        y: f64,
    },
}

impl Default for BadgeAlignment {
    fn default() -> Self {
        Self::TopTrailing { x: 0.0, y: 0.0 }
    }
}

impl BadgeAlignment {
    /// Offset from the corner, whichever corner it is.
    pub fn offset(self) -> Vec2 {
        match self {
            Self::TopLeading { x, y }
            | Self::TopTrailing { x, y }
            | Self::BottomLeading { x, y }
            | Self::BottomTrailing { x, y } => Vec2::new(x, y),
        }
    }

    /// Top-left origin of a badge of `badge` size on a host of `host` size.
    pub fn point_in(self, host: Size, badge: Size) -> Point {
        let radius = badge.height / 2.0;
        let trailing_x = host.width - badge.width;
        let bottom_y = host.height - badge.height;
        match self {
            Self::TopLeading { x, y } => Point::new(x - radius, y - radius),
            Self::TopTrailing { x, y } => Point::new(trailing_x + x + radius, y - radius),
            Self::BottomLeading { x, y } => Point::new(x - radius, bottom_y + y + radius),
            Self::BottomTrailing { x, y } => {
                Point::new(trailing_x + x + radius, bottom_y + y + radius)
            }
        }
    }
}

/// Resolve the badge origin for `alignment` on a host of `host_size`.
pub fn resolve_position(alignment: BadgeAlignment, host_size: Size, badge_size: Size) -> Point {
    alignment.point_in(host_size, badge_size)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/alignment.rs"]
mod tests;

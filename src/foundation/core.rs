pub use kurbo::{Affine, Point, Rect, Size, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// Interface orientation reported by the host binding.
pub enum Orientation {
    /// Portrait (upright or upside down).
    Portrait,
    /// Landscape (either side).
    Landscape,
    /// The host cannot tell, e.g. no window is attached yet.
    #[default]
    Unknown,
}

impl Orientation {
    /// Whether this orientation counts as landscape for badge scaling.
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Opaque id of a shape (circle or label) attached to a host by the binding.
pub struct ShapeHandle(pub u64);

/// Uniform scale transform about the shape's own anchor.
///
/// Hosts apply badge transforms relative to the shape center, so only the
/// scale part is carried here.
pub fn scale_transform(s: f64) -> Affine {
    Affine::scale(s)
}

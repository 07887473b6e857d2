//! # Axis Handles
//!
//! The six clickable ends of the gizmo and the canonical views they snap to.

/// One of the three principal axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Camera orientation (degrees) the gizmo snaps to when a handle is clicked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanonicalView {
    pub pitch: f32,
    pub yaw: f32,
}

impl CanonicalView {
    pub const fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }
}

/// A circular handle at one end of an axis.
///
/// Indices 0..=2 are the positive ends, 3..=5 the negative ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    PositiveX,
    PositiveY,
    PositiveZ,
    NegativeX,
    NegativeY,
    NegativeZ,
}

impl Handle {
    pub const ALL: [Handle; 6] = [
        Handle::PositiveX,
        Handle::PositiveY,
        Handle::PositiveZ,
        Handle::NegativeX,
        Handle::NegativeY,
        Handle::NegativeZ,
    ];

    pub fn index(self) -> usize {
        match self {
            Handle::PositiveX => 0,
            Handle::PositiveY => 1,
            Handle::PositiveZ => 2,
            Handle::NegativeX => 3,
            Handle::NegativeY => 4,
            Handle::NegativeZ => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Handle> {
        Self::ALL.get(index).copied()
    }

    pub fn axis(self) -> Axis {
        match self {
            Handle::PositiveX | Handle::NegativeX => Axis::X,
            Handle::PositiveY | Handle::NegativeY => Axis::Y,
            Handle::PositiveZ | Handle::NegativeZ => Axis::Z,
        }
    }

    pub fn is_positive(self) -> bool {
        matches!(self, Handle::PositiveX | Handle::PositiveY | Handle::PositiveZ)
    }

    pub fn label(self) -> &'static str {
        match self {
            Handle::PositiveX => "X",
            Handle::PositiveY => "Y",
            Handle::PositiveZ => "Z",
            Handle::NegativeX => "-X",
            Handle::NegativeY => "-Y",
            Handle::NegativeZ => "-Z",
        }
    }

    /// Pitch/yaw the camera adopts when this handle is clicked.
    pub fn canonical_view(self) -> CanonicalView {
        match self {
            Handle::PositiveX => CanonicalView::new(0.0, 180.0),
            Handle::PositiveY => CanonicalView::new(89.9, 0.0),
            Handle::PositiveZ => CanonicalView::new(0.0, 90.0),
            Handle::NegativeX => CanonicalView::new(0.0, 0.0),
            Handle::NegativeY => CanonicalView::new(-89.9, 0.0),
            Handle::NegativeZ => CanonicalView::new(0.0, -90.0),
        }
    }
}

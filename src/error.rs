//! Error types for the orientation gizmo.
//!
//! Only precondition violations surface as errors. Degenerate handle geometry
//! is skipped while drawing and out-of-range configuration is clamped, so
//! neither reaches the host.

use thiserror::Error;

/// Reasons a gizmo frame can be aborted before anything is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GizmoError {
    /// The supplied view matrix contains NaN or infinite entries.
    #[error("view matrix contains non-finite entries")]
    NonFiniteViewMatrix,

    /// The pivot distance used to rebuild the view after a snap is NaN or infinite.
    #[error("pivot distance {0} is not a finite number")]
    NonFinitePivotDistance(f32),

    /// The camera's pose (position, target or basis) is not finite.
    #[error("camera pose is degenerate (non-finite position, target or basis)")]
    DegenerateCamera,
}

/// Convenience alias used by the gizmo entry points.
pub type GizmoResult<T> = Result<T, GizmoError>;

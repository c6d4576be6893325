// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Errors raised when a box would violate the positive-size invariant.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// Requested width or height was not a positive finite number.
    #[error("invalid extent {width}x{height}: width and height must be positive and finite")]
    InvalidExtent {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
    /// Edges were inverted or not finite.
    #[error("invalid edges: left={left} right={right} bottom={bottom} top={top}")]
    InvalidEdges {
        /// Left edge.
        left: f32,
        /// Right edge.
        right: f32,
        /// Bottom edge.
        bottom: f32,
        /// Top edge.
        top: f32,
    },
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera pose value type.

use serde::{Deserialize, Serialize};

/// A camera pose: position, focal point and view-up vector.
///
/// This is a plain value type. The keyframe table stores copies, so editing
/// a pose somewhere else never silently changes a stored keyframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Camera position in world coordinates.
    pub position: [f64; 3],
    /// Point the camera looks at.
    pub focal_point: [f64; 3],
    /// View-up direction.
    pub view_up: [f64; 3],
}

impl CameraPose {
    /// Create a pose from its three vectors.
    pub fn new(position: [f64; 3], focal_point: [f64; 3], view_up: [f64; 3]) -> Self {
        Self {
            position,
            focal_point,
            view_up,
        }
    }
}

impl Default for CameraPose {
    /// One unit back from the origin on +Z, y-up.
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 1.0],
            focal_point: [0.0, 0.0, 0.0],
            view_up: [0.0, 1.0, 0.0],
        }
    }
}

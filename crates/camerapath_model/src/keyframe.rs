// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframe definitions for the camera path.

use crate::camera::CameraPose;
use serde::{Deserialize, Serialize};

/// A time-stamped camera pose.
///
/// The table that owns keyframes keeps them sorted strictly ascending by
/// time; two keyframes never share a time value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyFrame {
    /// Time value, in seconds.
    pub time: f64,
    /// Camera pose captured at this time.
    pub camera: CameraPose,
}

impl KeyFrame {
    /// Create a new keyframe.
    pub fn new(time: f64, camera: CameraPose) -> Self {
        Self { time, camera }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera path model.
//!
//! This crate provides the keyframe-to-trajectory engine for camera path
//! authoring and playback:
//! - Keyframe table with a strict no-duplicate-time invariant
//! - Kochanek-Bartels spline channels for position, focal point and view-up
//! - Path status tracking with explicit rebuilds
//! - Dense re-sampling for trajectory display
//! - Playback control and kcsv keyframe storage
//!
//! ## Architecture
//!
//! The model is built on:
//! - Scalar spline channels composed into 3-D point splines
//! - A camera path tying the keyframe table to three synchronized channels
//! - Value-copy camera poses (no shared mutable camera objects)

pub mod camera;
pub mod error;
pub mod keyframe;
pub mod path;
pub mod playback;
pub mod point_spline;
pub mod spline;
pub mod storage;

pub use camera::CameraPose;
pub use error::{PathError, Result};
pub use keyframe::KeyFrame;
pub use path::{CameraPath, PathStatus, DEFAULT_SAMPLE_RATE};
pub use playback::{PlaybackController, PlaybackState};
pub use point_spline::PointSpline;
pub use spline::ScalarSpline;
pub use storage::{load_kcsv, save_kcsv, StorageError, KCSV_EXTENSION};

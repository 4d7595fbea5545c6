// SPDX-License-Identifier: MIT OR Apache-2.0
//! Host integration for the camera path model.
//!
//! This crate wires the keyframe/spline model into a host application:
//! - A minimal scene registry with node identities, change events and
//!   observation of timeline-projecting node kinds
//! - The load-camera-path entry point turning a kcsv file into scene nodes
//! - A sequential flythrough driver with cooperative cancellation
//!
//! Rendering, encoding and UI remain the host's responsibility; they plug
//! in through [`FrameSink`] and the scene event stream.

pub mod flythrough;
pub mod loader;
pub mod scene;

pub use flythrough::{fly, FlythroughError, FlythroughReport, FrameSink};
pub use loader::{load_camera_path, LoadError};
pub use scene::{NodeId, Scene, SceneEvent, SceneNode};
